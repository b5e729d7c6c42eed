//! Alignment of the provider's "current" timestamp with the hourly arrays

use crate::SuitabilityError;
use chrono::{DateTime, NaiveDateTime};
use tracing::debug;

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Parse a provider timestamp into milliseconds on its own clock.
///
/// Offset-less timestamps are read as-is, so two naive timestamps from the
/// same response compare correctly.
fn timestamp_millis(value: &str) -> Option<i64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.timestamp_millis());
    }

    NAIVE_FORMATS.iter().find_map(|format| {
        NaiveDateTime::parse_from_str(value, format)
            .ok()
            .map(|dt| dt.and_utc().timestamp_millis())
    })
}

/// Find the hourly index that represents `current`.
///
/// An exact string match wins outright. Otherwise the entry with the
/// smallest absolute time difference is chosen, keeping the first one on
/// ties. Unparsable hourly entries are skipped.
pub fn align_current_to_hourly(current: &str, hourly_times: &[String]) -> crate::Result<usize> {
    if hourly_times.is_empty() {
        return Err(SuitabilityError::parse("Hourly time array is empty"));
    }

    if let Some(index) = hourly_times.iter().position(|time| time == current) {
        return Ok(index);
    }

    let current_ms = timestamp_millis(current).ok_or_else(|| {
        SuitabilityError::parse(format!("Unparsable current timestamp: '{current}'"))
    })?;

    let mut best: Option<(usize, i64)> = None;
    for (index, time) in hourly_times.iter().enumerate() {
        let Some(ms) = timestamp_millis(time) else {
            continue;
        };
        let diff = (ms - current_ms).abs();
        if best.is_none_or(|(_, best_diff)| diff < best_diff) {
            best = Some((index, diff));
        }
    }

    let (index, diff) = best.ok_or_else(|| {
        SuitabilityError::parse("No parsable timestamps in hourly time array")
    })?;

    debug!(
        "No exact hourly match for '{}', using nearest index {} ({} ms away)",
        current, index, diff
    );

    Ok(index)
}
