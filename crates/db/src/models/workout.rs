//! Workout entry model and DTOs.

use gymtrack_core::metrics::RawMetrics;
use gymtrack_core::progress::ProgressSample;
use gymtrack_core::types::{DbId, Timestamp};
use gymtrack_core::validation::MAX_NOTES_LEN;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `workout_entries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkoutEntry {
    pub id: DbId,
    pub user_id: DbId,
    pub exercise_id: DbId,
    pub weight: Option<f64>,
    pub repetitions: Option<i32>,
    pub sets: Option<i32>,
    pub time_minutes: Option<f64>,
    pub distance_km: Option<f64>,
    pub date: Timestamp,
    pub notes: Option<String>,
    pub created_at: Timestamp,
}

impl WorkoutEntry {
    pub fn metrics(&self) -> RawMetrics {
        RawMetrics {
            weight: self.weight,
            repetitions: self.repetitions,
            sets: self.sets,
            time_minutes: self.time_minutes,
            distance_km: self.distance_km,
        }
    }

    pub fn to_progress_sample(&self) -> ProgressSample {
        ProgressSample {
            date: self.date,
            metrics: self.metrics(),
        }
    }

    /// Apply a partial update in memory, leaving unspecified fields untouched.
    ///
    /// Used to check invariants against the entry as it would look after the
    /// update, before anything is written.
    pub fn merged_with(&self, update: &UpdateWorkoutEntry) -> WorkoutEntry {
        WorkoutEntry {
            exercise_id: update.exercise_id.unwrap_or(self.exercise_id),
            weight: update.weight.or(self.weight),
            repetitions: update.repetitions.or(self.repetitions),
            sets: update.sets.or(self.sets),
            time_minutes: update.time_minutes.or(self.time_minutes),
            distance_km: update.distance_km.or(self.distance_km),
            date: update.date.unwrap_or(self.date),
            notes: update.notes.clone().or_else(|| self.notes.clone()),
            ..self.clone()
        }
    }
}

/// A workout entry joined with the name and muscle group of its exercise.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkoutEntryDetail {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub entry: WorkoutEntry,
    pub exercise_name: String,
    pub muscle_group: String,
}

/// DTO for logging a workout. `date` defaults to the time of the request.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateWorkoutEntry {
    pub exercise_id: DbId,
    #[validate(range(min = 0.0))]
    pub weight: Option<f64>,
    #[validate(range(min = 1))]
    pub repetitions: Option<i32>,
    #[validate(range(min = 1))]
    pub sets: Option<i32>,
    #[validate(range(min = 0.0))]
    pub time_minutes: Option<f64>,
    #[validate(range(min = 0.0))]
    pub distance_km: Option<f64>,
    pub date: Option<Timestamp>,
    #[validate(length(max = MAX_NOTES_LEN))]
    pub notes: Option<String>,
}

impl CreateWorkoutEntry {
    pub fn metrics(&self) -> RawMetrics {
        RawMetrics {
            weight: self.weight,
            repetitions: self.repetitions,
            sets: self.sets,
            time_minutes: self.time_minutes,
            distance_km: self.distance_km,
        }
    }
}

/// DTO for a partial update. Only supplied fields change.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateWorkoutEntry {
    pub exercise_id: Option<DbId>,
    #[validate(range(min = 0.0))]
    pub weight: Option<f64>,
    #[validate(range(min = 1))]
    pub repetitions: Option<i32>,
    #[validate(range(min = 1))]
    pub sets: Option<i32>,
    #[validate(range(min = 0.0))]
    pub time_minutes: Option<f64>,
    #[validate(range(min = 0.0))]
    pub distance_km: Option<f64>,
    pub date: Option<Timestamp>,
    #[validate(length(max = MAX_NOTES_LEN))]
    pub notes: Option<String>,
}
