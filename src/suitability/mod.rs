//! Outdoor suitability assessment
//!
//! Ties the weather pipeline together: fetch a forecast, align it to the
//! current hour, classify the weather code, score every factor and compose
//! the final recommendation.

pub mod composer;
pub mod scorer;

pub use composer::{build_reason, clamp_score, compose_assessment};
pub use scorer::{BASELINE_SCORE, Deduction, Factor, ScoreBreakdown, score_conditions};

use crate::models::{AssessmentResult, Coordinates, WeatherSnapshot};
use crate::weather::{ForecastProvider, build_snapshot, classify_weather_code};
use tracing::{debug, info, instrument};

/// Assess an already-built snapshot. Pure and deterministic.
#[must_use]
pub fn assess_snapshot(snapshot: WeatherSnapshot) -> AssessmentResult {
    let condition = classify_weather_code(snapshot.weather_code);
    let breakdown = score_conditions(&snapshot, condition.severity);

    debug!(
        raw_score = breakdown.raw_score,
        deductions = ?breakdown.deductions,
        "Scored weather conditions"
    );

    compose_assessment(snapshot, breakdown)
}

/// Runs complete assessments against a forecast provider
pub struct OutdoorAssessor<P> {
    provider: P,
}

impl<P: ForecastProvider> OutdoorAssessor<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Fetch the forecast for a coordinate and assess it.
    ///
    /// Invalid coordinates are rejected before any request is made.
    #[instrument(skip(self))]
    pub async fn assess(&self, latitude: f64, longitude: f64) -> crate::Result<AssessmentResult> {
        let coordinates = Coordinates::new(latitude, longitude)?;

        let response = self.provider.fetch_forecast(coordinates).await?;
        let snapshot = build_snapshot(&response)?;
        let result = assess_snapshot(snapshot);

        info!(
            score = result.score,
            good_for_outdoor = result.is_good_for_outdoor,
            warnings = result.warnings.len(),
            "Assessed outdoor suitability for {}",
            coordinates.format_coordinates()
        );

        Ok(result)
    }
}
