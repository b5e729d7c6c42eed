//! Data models for the outdoor suitability engine
//!
//! This module contains the core domain models organized by concern:
//! - Location: validated geographic coordinates
//! - Weather: the immutable weather snapshot an assessment is based on
//! - Assessment: severities, per-factor conditions and the final result

pub mod assessment;
pub mod location;
pub mod weather;

// Re-export all public types for convenient access
pub use assessment::{AssessmentResult, ConditionSeverity, ConditionsMap};
pub use location::Coordinates;
pub use weather::WeatherSnapshot;
