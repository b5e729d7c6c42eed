//! Builds a `WeatherSnapshot` from a forecast response

use crate::SuitabilityError;
use crate::models::WeatherSnapshot;
use crate::weather::alignment::align_current_to_hourly;
use crate::weather::conditions::classify_weather_code;
use crate::weather::open_meteo::ForecastResponse;
use tracing::debug;

fn hourly_value<T: Copy>(field: &str, values: Option<&Vec<Option<T>>>, index: usize) -> crate::Result<T> {
    let values =
        values.ok_or_else(|| SuitabilityError::parse(format!("Missing hourly field '{field}'")))?;

    values.get(index).copied().flatten().ok_or_else(|| {
        SuitabilityError::parse(format!("Hourly field '{field}' has no value at index {index}"))
    })
}

fn first_daily(field: &str, values: Option<&Vec<String>>) -> crate::Result<String> {
    values
        .and_then(|v| v.first())
        .cloned()
        .ok_or_else(|| SuitabilityError::parse(format!("Missing daily field '{field}'")))
}

/// Combine the current weather block with the aligned hourly sample and
/// today's daily values.
pub fn build_snapshot(response: &ForecastResponse) -> crate::Result<WeatherSnapshot> {
    let current = response
        .current_weather
        .as_ref()
        .ok_or_else(|| SuitabilityError::parse("Response has no current_weather block"))?;
    let hourly = response
        .hourly
        .as_ref()
        .ok_or_else(|| SuitabilityError::parse("Response has no hourly block"))?;
    let daily = response
        .daily
        .as_ref()
        .ok_or_else(|| SuitabilityError::parse("Response has no daily block"))?;

    let index = align_current_to_hourly(&current.time, &hourly.time)?;
    debug!(
        "Aligned current time {} to hourly index {} ({})",
        current.time, index, hourly.time[index]
    );

    let condition = classify_weather_code(current.weather_code);

    Ok(WeatherSnapshot {
        time: current.time.clone(),
        temperature: current.temperature,
        feels_like: hourly_value("apparent_temperature", hourly.apparent_temperature.as_ref(), index)?,
        humidity: hourly_value("relativehumidity_2m", hourly.relative_humidity.as_ref(), index)?,
        wind_speed: current.wind_speed,
        precipitation: hourly_value("precipitation", hourly.precipitation.as_ref(), index)?,
        precipitation_probability: hourly_value(
            "precipitation_probability",
            hourly.precipitation_probability.as_ref(),
            index,
        )?,
        weather_code: current.weather_code,
        description: condition.description.to_string(),
        visibility: hourly_value("visibility", hourly.visibility.as_ref(), index)?,
        uv_index: hourly_value("uv_index", hourly.uv_index.as_ref(), index)?,
        is_day: current.is_day != 0,
        sunrise: first_daily("sunrise", daily.sunrise.as_ref())?,
        sunset: first_daily("sunset", daily.sunset.as_ref())?,
    })
}
