//! Turns a score breakdown into the final assessment

use crate::models::assessment::GOOD_FOR_OUTDOOR_THRESHOLD;
use crate::models::{AssessmentResult, WeatherSnapshot};
use crate::suitability::scorer::ScoreBreakdown;

/// Clamp a raw score into 0..=100
#[must_use]
pub fn clamp_score(raw_score: i32) -> u8 {
    // In range after the clamp
    raw_score.clamp(0, 100) as u8
}

/// Narrative summary for a clamped score
#[must_use]
pub fn build_reason(score: u8, snapshot: &WeatherSnapshot, warnings: &[String]) -> String {
    let temperature = snapshot.rounded_temperature();
    let description = snapshot.description.to_lowercase();

    match score {
        80..=100 => format!(
            "Great conditions for outdoor activities! {temperature}°C with {description}."
        ),
        60..=79 => {
            let mut reason = format!(
                "Decent conditions for outdoor activities: {temperature}°C with {description}."
            );
            if let Some(first) = warnings.first() {
                reason.push_str(&format!(" Note: {first}."));
            }
            reason
        }
        40..=59 => format!(
            "Conditions are not ideal for outdoor activities ({temperature}°C, {description}). Consider indoor alternatives."
        ),
        _ => format!(
            "Poor conditions for outdoor activities ({temperature}°C, {description}). Indoor activities are recommended."
        ),
    }
}

/// Assemble the assessment from a snapshot and its score breakdown
#[must_use]
pub fn compose_assessment(snapshot: WeatherSnapshot, breakdown: ScoreBreakdown) -> AssessmentResult {
    let score = clamp_score(breakdown.raw_score);
    let reason = build_reason(score, &snapshot, &breakdown.warnings);

    AssessmentResult {
        score,
        is_good_for_outdoor: score >= GOOD_FOR_OUTDOOR_THRESHOLD,
        reason,
        warnings: breakdown.warnings,
        conditions: breakdown.conditions,
        weather_data: snapshot,
    }
}
