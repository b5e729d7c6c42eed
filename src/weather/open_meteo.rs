//! `OpenMeteo` forecast API request parameters and response structures

use serde::Deserialize;

/// Hourly variables requested alongside the current weather block
pub const HOURLY_FIELDS: &str = "temperature_2m,precipitation_probability,precipitation,weathercode,relativehumidity_2m,apparent_temperature,visibility,uv_index";

/// Daily variables requested alongside the current weather block
pub const DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min,precipitation_sum,precipitation_probability_max,sunrise,sunset";

/// Build the query string for a forecast request
#[must_use]
pub fn forecast_query(latitude: f64, longitude: f64, forecast_days: u32) -> Vec<(&'static str, String)> {
    vec![
        ("latitude", latitude.to_string()),
        ("longitude", longitude.to_string()),
        ("current_weather", "true".to_string()),
        ("hourly", HOURLY_FIELDS.to_string()),
        ("daily", DAILY_FIELDS.to_string()),
        ("timezone", "auto".to_string()),
        ("forecast_days", forecast_days.to_string()),
    ]
}

/// Forecast response from `OpenMeteo`. Blocks are optional here; the
/// snapshot builder reports whichever one it needs and cannot find.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timezone: Option<String>,
    pub current_weather: Option<CurrentWeather>,
    pub hourly: Option<HourlyData>,
    pub daily: Option<DailyData>,
}

/// `current_weather=true` block
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeather {
    pub time: String,
    pub temperature: f64,
    #[serde(rename = "windspeed")]
    pub wind_speed: f64,
    #[serde(rename = "winddirection")]
    pub wind_direction: Option<f64>,
    #[serde(rename = "weathercode")]
    pub weather_code: i32,
    pub is_day: u8,
}

/// Hourly parallel arrays, index-aligned with `time`
#[derive(Debug, Clone, Deserialize)]
pub struct HourlyData {
    pub time: Vec<String>,
    #[serde(rename = "temperature_2m")]
    pub temperature: Option<Vec<Option<f64>>>,
    pub precipitation_probability: Option<Vec<Option<f64>>>,
    pub precipitation: Option<Vec<Option<f64>>>,
    #[serde(rename = "weathercode")]
    pub weather_code: Option<Vec<Option<i32>>>,
    #[serde(rename = "relativehumidity_2m")]
    pub relative_humidity: Option<Vec<Option<f64>>>,
    pub apparent_temperature: Option<Vec<Option<f64>>>,
    pub visibility: Option<Vec<Option<f64>>>,
    pub uv_index: Option<Vec<Option<f64>>>,
}

/// Daily parallel arrays, index-aligned with `time`
#[derive(Debug, Clone, Deserialize)]
pub struct DailyData {
    pub time: Vec<String>,
    #[serde(rename = "temperature_2m_max")]
    pub temperature_max: Option<Vec<Option<f64>>>,
    #[serde(rename = "temperature_2m_min")]
    pub temperature_min: Option<Vec<Option<f64>>>,
    pub precipitation_sum: Option<Vec<Option<f64>>>,
    pub precipitation_probability_max: Option<Vec<Option<f64>>>,
    pub sunrise: Option<Vec<String>>,
    pub sunset: Option<Vec<String>>,
}
