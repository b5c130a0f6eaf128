//! Workout entry invariants that hold regardless of how the entry arrives
//! (create or partial update).

use chrono::Duration;

use crate::error::CoreError;
use crate::metrics::RawMetrics;
use crate::types::Timestamp;

/// How far into the future a workout may be dated, in days.
pub const MAX_FUTURE_DAYS: i64 = 1;

/// Maximum length of a workout note.
pub const MAX_NOTES_LEN: u64 = 1000;

/// An entry must record at least one raw metric.
pub fn validate_has_metric(metrics: &RawMetrics) -> Result<(), CoreError> {
    if !metrics.has_any() {
        return Err(CoreError::Validation(
            "At least one of weight, repetitions, sets, time_minutes or distance_km is required"
                .into(),
        ));
    }
    Ok(())
}

/// A workout may not be dated more than [`MAX_FUTURE_DAYS`] after `now`.
pub fn validate_workout_date(date: Timestamp, now: Timestamp) -> Result<(), CoreError> {
    if date > now + Duration::days(MAX_FUTURE_DAYS) {
        return Err(CoreError::Validation(format!(
            "Workout date cannot be more than {MAX_FUTURE_DAYS} day in the future"
        )));
    }
    Ok(())
}

/// Check both entry invariants.
pub fn validate_workout(
    metrics: &RawMetrics,
    date: Timestamp,
    now: Timestamp,
) -> Result<(), CoreError> {
    validate_has_metric(metrics)?;
    validate_workout_date(date, now)
}
