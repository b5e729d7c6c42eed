//! Outdoor suitability engine
//!
//! Turns the weather forecast for a coordinate into a 0-100 score for how
//! safe and pleasant it is to be outside right now, together with a
//! recommendation, warnings and per-factor severities.

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod suitability;
pub mod weather;

// Re-export core types for public API
pub use config::SuitabilityConfig;
pub use error::SuitabilityError;
pub use models::{AssessmentResult, ConditionSeverity, ConditionsMap, Coordinates, WeatherSnapshot};
pub use suitability::{OutdoorAssessor, assess_snapshot};
pub use weather::{ForecastProvider, OpenMeteoClient};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, SuitabilityError>;
