//! Repository for the `workout_entries` table.
//!
//! Every read and write is scoped by `user_id`: entries are private to the
//! user who logged them.

use gymtrack_core::types::{DbId, Timestamp};
use sqlx::SqlitePool;

use crate::models::workout::{
    CreateWorkoutEntry, UpdateWorkoutEntry, WorkoutEntry, WorkoutEntryDetail,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, exercise_id, weight, repetitions, sets, \
                       time_minutes, distance_km, date, notes, created_at";

/// Entry columns qualified for joins against `exercises`, plus the joined fields.
const DETAIL_COLUMNS: &str = "w.id, w.user_id, w.exercise_id, w.weight, w.repetitions, w.sets, \
                              w.time_minutes, w.distance_km, w.date, w.notes, w.created_at, \
                              e.name AS exercise_name, e.muscle_group";

/// Provides CRUD operations for workout entries.
pub struct WorkoutRepo;

impl WorkoutRepo {
    /// Insert a workout entry for `user_id` dated `date`.
    pub async fn create(
        pool: &SqlitePool,
        user_id: DbId,
        date: Timestamp,
        input: &CreateWorkoutEntry,
    ) -> Result<WorkoutEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO workout_entries
                (user_id, exercise_id, weight, repetitions, sets, time_minutes, distance_km, date, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorkoutEntry>(&query)
            .bind(user_id)
            .bind(input.exercise_id)
            .bind(input.weight)
            .bind(input.repetitions)
            .bind(input.sets)
            .bind(input.time_minutes)
            .bind(input.distance_km)
            .bind(date)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find an entry by ID if it belongs to `user_id`.
    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<WorkoutEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM workout_entries WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, WorkoutEntry>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Find an entry with its exercise details if it belongs to `user_id`.
    pub async fn find_detail(
        pool: &SqlitePool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<WorkoutEntryDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS}
             FROM workout_entries w
             JOIN exercises e ON e.id = w.exercise_id
             WHERE w.id = $1 AND w.user_id = $2"
        );
        sqlx::query_as::<_, WorkoutEntryDetail>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's entries, newest first, optionally for one exercise.
    pub async fn list_for_user(
        pool: &SqlitePool,
        user_id: DbId,
        exercise_id: Option<DbId>,
    ) -> Result<Vec<WorkoutEntryDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS}
             FROM workout_entries w
             JOIN exercises e ON e.id = w.exercise_id
             WHERE w.user_id = $1 AND ($2 IS NULL OR w.exercise_id = $2)
             ORDER BY w.date DESC, w.id DESC"
        );
        sqlx::query_as::<_, WorkoutEntryDetail>(&query)
            .bind(user_id)
            .bind(exercise_id)
            .fetch_all(pool)
            .await
    }

    /// All of a user's entries for one exercise, in insertion order.
    ///
    /// Callers needing chronological order sort by `date` themselves; the
    /// insertion order breaks ties between equal timestamps.
    pub async fn list_for_exercise(
        pool: &SqlitePool,
        user_id: DbId,
        exercise_id: DbId,
    ) -> Result<Vec<WorkoutEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM workout_entries
             WHERE user_id = $1 AND exercise_id = $2
             ORDER BY id"
        );
        sqlx::query_as::<_, WorkoutEntry>(&query)
            .bind(user_id)
            .bind(exercise_id)
            .fetch_all(pool)
            .await
    }

    /// Update an entry owned by `user_id`. Only non-`None` fields are applied.
    ///
    /// Returns `None` if the entry does not exist or belongs to someone else.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        user_id: DbId,
        input: &UpdateWorkoutEntry,
    ) -> Result<Option<WorkoutEntry>, sqlx::Error> {
        let query = format!(
            "UPDATE workout_entries SET
                exercise_id = COALESCE($3, exercise_id),
                weight = COALESCE($4, weight),
                repetitions = COALESCE($5, repetitions),
                sets = COALESCE($6, sets),
                time_minutes = COALESCE($7, time_minutes),
                distance_km = COALESCE($8, distance_km),
                date = COALESCE($9, date),
                notes = COALESCE($10, notes)
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorkoutEntry>(&query)
            .bind(id)
            .bind(user_id)
            .bind(input.exercise_id)
            .bind(input.weight)
            .bind(input.repetitions)
            .bind(input.sets)
            .bind(input.time_minutes)
            .bind(input.distance_km)
            .bind(input.date)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete an entry owned by `user_id`. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM workout_entries WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
