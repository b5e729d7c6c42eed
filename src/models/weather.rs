//! Weather snapshot model and display methods

use serde::{Deserialize, Serialize};

/// Weather conditions at the aligned "current" hour for one location.
///
/// Built once per assessment and only read afterwards.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    /// Observation time as reported by the provider (location-local clock)
    pub time: String,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Apparent temperature in Celsius
    pub feels_like: f64,
    /// Relative humidity percentage (0-100)
    pub humidity: f64,
    /// Wind speed in km/h
    pub wind_speed: f64,
    /// Precipitation amount in mm
    pub precipitation: f64,
    /// Precipitation probability percentage (0-100)
    pub precipitation_probability: f64,
    /// WMO weather code
    pub weather_code: i32,
    /// Human-readable description of the weather code
    pub description: String,
    /// Visibility in meters
    pub visibility: f64,
    /// UV index
    pub uv_index: f64,
    /// Whether the observation is during daylight
    pub is_day: bool,
    /// Sunrise of the current day (ISO timestamp)
    pub sunrise: String,
    /// Sunset of the current day (ISO timestamp)
    pub sunset: String,
}

impl WeatherSnapshot {
    /// Temperature rounded to whole degrees, as used in narrative text
    #[must_use]
    pub fn rounded_temperature(&self) -> i64 {
        self.temperature.round() as i64
    }

    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!(
            "{:.1}°C (feels like {:.1}°C)",
            self.temperature, self.feels_like
        )
    }

    /// Format wind information
    #[must_use]
    pub fn format_wind(&self) -> String {
        format!("{:.1} km/h", self.wind_speed)
    }

    /// Format precipitation amount and probability
    #[must_use]
    pub fn format_precipitation(&self) -> String {
        format!(
            "{:.1} mm ({:.0}% chance)",
            self.precipitation, self.precipitation_probability
        )
    }

    /// Format visibility in kilometers
    #[must_use]
    pub fn format_visibility(&self) -> String {
        format!("{:.1} km", self.visibility / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WeatherSnapshot {
        WeatherSnapshot {
            time: "2024-06-01T12:00".to_string(),
            temperature: 21.6,
            feels_like: 20.9,
            humidity: 55.0,
            wind_speed: 12.4,
            precipitation: 0.2,
            precipitation_probability: 15.0,
            weather_code: 2,
            description: "Partly cloudy".to_string(),
            visibility: 24_140.0,
            uv_index: 5.3,
            is_day: true,
            sunrise: "2024-06-01T05:31".to_string(),
            sunset: "2024-06-01T21:12".to_string(),
        }
    }

    #[test]
    fn test_rounded_temperature() {
        let mut snapshot = sample();
        assert_eq!(snapshot.rounded_temperature(), 22);
        snapshot.temperature = -4.5;
        assert_eq!(snapshot.rounded_temperature(), -5);
    }

    #[test]
    fn test_formatting() {
        let snapshot = sample();
        assert_eq!(snapshot.format_temperature(), "21.6°C (feels like 20.9°C)");
        assert_eq!(snapshot.format_wind(), "12.4 km/h");
        assert_eq!(snapshot.format_precipitation(), "0.2 mm (15% chance)");
        assert_eq!(snapshot.format_visibility(), "24.1 km");
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["feelsLike"], 20.9);
        assert_eq!(json["precipitationProbability"], 15.0);
        assert_eq!(json["uvIndex"], 5.3);
        assert_eq!(json["isDay"], true);
    }
}
