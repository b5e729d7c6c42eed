//! Weather acquisition: fetching, time alignment and code classification

pub mod alignment;
pub mod client;
pub mod conditions;
pub mod open_meteo;
pub mod snapshot;

pub use alignment::align_current_to_hourly;
pub use client::{ForecastProvider, OpenMeteoClient};
pub use conditions::{WeatherCondition, classify_weather_code};
pub use open_meteo::ForecastResponse;
pub use snapshot::build_snapshot;
