//! Assessment result types shared between the scorer, the composer and callers

use serde::{Deserialize, Serialize};
use std::fmt;

use super::WeatherSnapshot;

/// Score at or above which outdoor activity is recommended
pub const GOOD_FOR_OUTDOOR_THRESHOLD: u8 = 60;

/// Coarse severity tier of a single physical factor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionSeverity {
    #[default]
    Good,
    Moderate,
    Bad,
}

impl fmt::Display for ConditionSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConditionSeverity::Good => write!(f, "good"),
            ConditionSeverity::Moderate => write!(f, "moderate"),
            ConditionSeverity::Bad => write!(f, "bad"),
        }
    }
}

/// Severity per physical factor. Every factor is always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionsMap {
    pub temperature: ConditionSeverity,
    pub precipitation: ConditionSeverity,
    pub wind: ConditionSeverity,
    pub visibility: ConditionSeverity,
    pub uv_index: ConditionSeverity,
}

impl ConditionsMap {
    /// Factor name and severity pairs in scoring order
    #[must_use]
    pub fn entries(&self) -> [(&'static str, ConditionSeverity); 5] {
        [
            ("temperature", self.temperature),
            ("precipitation", self.precipitation),
            ("wind", self.wind),
            ("visibility", self.visibility),
            ("uvIndex", self.uv_index),
        ]
    }

    /// Worst severity across all factors
    #[must_use]
    pub fn worst(&self) -> ConditionSeverity {
        self.entries()
            .iter()
            .map(|(_, severity)| *severity)
            .max()
            .unwrap_or_default()
    }
}

/// Outcome of one outdoor suitability assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    /// Suitability score (0-100)
    pub score: u8,
    /// Always equal to `score >= 60`
    pub is_good_for_outdoor: bool,
    /// Narrative summary
    pub reason: String,
    /// One entry per triggered threshold tier, in scoring order
    pub warnings: Vec<String>,
    pub conditions: ConditionsMap,
    pub weather_data: WeatherSnapshot,
}
