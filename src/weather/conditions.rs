//! Weather code classification

use crate::models::ConditionSeverity;

/// Description and coarse severity for a WMO weather code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherCondition {
    pub description: &'static str,
    pub severity: ConditionSeverity,
}

impl WeatherCondition {
    const fn new(description: &'static str, severity: ConditionSeverity) -> Self {
        Self {
            description,
            severity,
        }
    }
}

/// Classify an `OpenMeteo` (WMO) weather code.
///
/// Codes outside the table are reported as "Unknown" with moderate severity.
#[must_use]
pub fn classify_weather_code(code: i32) -> WeatherCondition {
    use ConditionSeverity::{Bad, Good, Moderate};

    match code {
        0 => WeatherCondition::new("Clear sky", Good),
        1 => WeatherCondition::new("Mainly clear", Good),
        2 => WeatherCondition::new("Partly cloudy", Good),
        3 => WeatherCondition::new("Overcast", Good),
        45 => WeatherCondition::new("Fog", Moderate),
        48 => WeatherCondition::new("Depositing rime fog", Moderate),
        51 => WeatherCondition::new("Light drizzle", Moderate),
        53 => WeatherCondition::new("Moderate drizzle", Moderate),
        55 => WeatherCondition::new("Dense drizzle", Moderate),
        56 => WeatherCondition::new("Light freezing drizzle", Bad),
        57 => WeatherCondition::new("Dense freezing drizzle", Bad),
        61 => WeatherCondition::new("Slight rain", Moderate),
        63 => WeatherCondition::new("Moderate rain", Moderate),
        65 => WeatherCondition::new("Heavy rain", Bad),
        66 => WeatherCondition::new("Light freezing rain", Bad),
        67 => WeatherCondition::new("Heavy freezing rain", Bad),
        71 => WeatherCondition::new("Slight snow fall", Moderate),
        73 => WeatherCondition::new("Moderate snow fall", Moderate),
        75 => WeatherCondition::new("Heavy snow fall", Bad),
        77 => WeatherCondition::new("Snow grains", Moderate),
        80 => WeatherCondition::new("Slight rain showers", Moderate),
        81 => WeatherCondition::new("Moderate rain showers", Moderate),
        82 => WeatherCondition::new("Violent rain showers", Bad),
        85 => WeatherCondition::new("Slight snow showers", Moderate),
        86 => WeatherCondition::new("Heavy snow showers", Bad),
        95 => WeatherCondition::new("Thunderstorm", Bad),
        96 => WeatherCondition::new("Thunderstorm with slight hail", Bad),
        99 => WeatherCondition::new("Thunderstorm with heavy hail", Bad),
        _ => WeatherCondition::new("Unknown", Moderate),
    }
}
