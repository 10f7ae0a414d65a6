//! Rendering of weather payloads into display strings.
//!
//! Everything here is a pure function: the same payload always renders to
//! the same string, and failures render through the error's `Display` form.

use std::fmt::Write;

use super::model::{CurrentConditions, Forecast};

/// 16-point compass rose, clockwise from north.
const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Convert meteorological degrees into a compass point.
pub fn compass_point(degrees: f64) -> &'static str {
    let normalized = degrees.rem_euclid(360.0);
    let index = ((normalized + 11.25) / 22.5) as usize % COMPASS_POINTS.len();
    COMPASS_POINTS[index]
}

/// Render current conditions for a place.
pub fn render_current(report: &CurrentConditions) -> String {
    let units = report.units;
    let symbol = units.temperature_symbol();

    let wind = match report.wind_direction_deg {
        Some(deg) => format!(
            "{:.1} {} {}",
            report.wind_speed,
            units.wind_speed_unit(),
            compass_point(deg)
        ),
        None => format!("{:.1} {}", report.wind_speed, units.wind_speed_unit()),
    };

    format!(
        "{place}: {condition}\n\
         Temperature: {temp:.1}{symbol} (feels like {feels:.1}{symbol})\n\
         Humidity: {humidity}%\n\
         Wind: {wind}",
        place = place_label(&report.place, report.country.as_deref()),
        condition = report.condition,
        temp = report.temperature,
        feels = report.feels_like,
        humidity = report.humidity,
    )
}

/// Render a forecast, one line per provider entry, chronological.
pub fn render_forecast(forecast: &Forecast) -> String {
    let symbol = forecast.units.temperature_symbol();
    let mut out = format!(
        "Forecast for {}:",
        place_label(&forecast.place, forecast.country.as_deref())
    );

    for entry in &forecast.entries {
        let _ = write!(
            out,
            "\n{}  {:.1}{}  {}",
            entry.at.format("%Y-%m-%d %H:%M UTC"),
            entry.temperature,
            symbol,
            entry.condition
        );
    }

    out
}

fn place_label(place: &str, country: Option<&str>) -> String {
    match country {
        Some(country) => format!("{place}, {country}"),
        None => place.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::weather::model::{ForecastEntry, Units};
    use chrono::{DateTime, Utc};

    fn london_report(units: Units) -> CurrentConditions {
        CurrentConditions {
            place: "London".to_string(),
            country: Some("GB".to_string()),
            temperature: 15.2,
            feels_like: 14.8,
            condition: "Scattered Clouds".to_string(),
            humidity: 72,
            wind_speed: 3.1,
            wind_direction_deg: Some(250.0),
            observed_at: ts(1736935200),
            units,
        }
    }

    fn ts(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    #[test]
    fn test_render_current_contains_all_fields() {
        let rendered = render_current(&london_report(Units::Metric));
        assert!(rendered.contains("London, GB"));
        assert!(rendered.contains("Scattered Clouds"));
        assert!(rendered.contains("15.2"));
        assert!(rendered.contains("14.8"));
        assert!(rendered.contains("72%"));
        assert!(rendered.contains("3.1"));
        assert!(rendered.contains("WSW"));
    }

    #[test]
    fn test_render_current_unit_symbols() {
        let metric = render_current(&london_report(Units::Metric));
        assert!(metric.contains("15.2°C"));
        assert!(metric.contains("m/s"));

        let imperial = render_current(&london_report(Units::Imperial));
        assert!(imperial.contains("15.2°F"));
        assert!(imperial.contains("mph"));

        let kelvin = render_current(&london_report(Units::Kelvin));
        assert!(kelvin.contains("15.2K"));
        assert!(kelvin.contains("m/s"));
    }

    #[test]
    fn test_render_current_without_country_or_wind_direction() {
        let mut report = london_report(Units::Metric);
        report.country = None;
        report.wind_direction_deg = None;
        let rendered = render_current(&report);
        assert!(rendered.starts_with("London: "));
        assert!(rendered.ends_with("3.1 m/s"));
    }

    #[test]
    fn test_render_is_pure() {
        let report = london_report(Units::Metric);
        assert_eq!(render_current(&report), render_current(&report));
    }

    #[test]
    fn test_render_forecast_keeps_every_entry_in_order() {
        let conditions = ["light snow", "overcast clouds", "scattered clouds", "clear sky"];
        let forecast = Forecast {
            place: "Berlin".to_string(),
            country: Some("DE".to_string()),
            entries: conditions
                .iter()
                .enumerate()
                .map(|(i, condition)| ForecastEntry {
                    at: ts(1736935200 + i as i64 * 10800),
                    temperature: 2.0 + i as f64,
                    condition: condition.to_string(),
                })
                .collect(),
            units: Units::Metric,
        };

        let rendered = render_forecast(&forecast);
        assert_eq!(rendered.lines().count(), conditions.len() + 1);
        assert!(rendered.starts_with("Forecast for Berlin, DE:"));

        // Chronological, none dropped or reordered.
        let positions: Vec<_> = conditions
            .iter()
            .map(|c| rendered.find(c).expect("entry missing from output"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_forecast_timestamps_are_labelled() {
        let forecast = Forecast {
            place: "Berlin".to_string(),
            country: Some("DE".to_string()),
            entries: vec![ForecastEntry {
                at: ts(1736935200),
                temperature: 2.4,
                condition: "light snow".to_string(),
            }],
            units: Units::Metric,
        };
        let rendered = render_forecast(&forecast);
        assert!(rendered.contains("2025-01-15 10:00 UTC"));
    }

    #[test]
    fn test_compass_points() {
        assert_eq!(compass_point(0.0), "N");
        assert_eq!(compass_point(90.0), "E");
        assert_eq!(compass_point(180.0), "S");
        assert_eq!(compass_point(225.0), "SW");
        assert_eq!(compass_point(250.0), "WSW");
        assert_eq!(compass_point(359.0), "N");
        assert_eq!(compass_point(-90.0), "W");
    }
}
