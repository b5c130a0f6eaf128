//! Repository for the `exercises` table.

use gymtrack_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::exercise::{CreateExercise, Exercise, MuscleGroupCount, UpdateExercise};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, muscle_group, user_id, created_at";

/// Visibility predicate: predefined rows plus the caller's own.
const VISIBLE_TO: &str = "(user_id IS NULL OR user_id = $1)";

/// Provides CRUD operations for exercises.
pub struct ExerciseRepo;

impl ExerciseRepo {
    /// Insert an exercise. `owner` is `None` for predefined catalog rows.
    pub async fn create(
        pool: &SqlitePool,
        owner: Option<DbId>,
        input: &CreateExercise,
    ) -> Result<Exercise, sqlx::Error> {
        let query = format!(
            "INSERT INTO exercises (name, description, muscle_group, user_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Exercise>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.muscle_group)
            .bind(owner)
            .fetch_one(pool)
            .await
    }

    /// Find an exercise by ID regardless of owner.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Exercise>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM exercises WHERE id = $1");
        sqlx::query_as::<_, Exercise>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an exercise by ID only if `user_id` may see it.
    pub async fn find_visible(
        pool: &SqlitePool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Exercise>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM exercises WHERE {VISIBLE_TO} AND id = $2");
        sqlx::query_as::<_, Exercise>(&query)
            .bind(user_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List exercises visible to `user_id`, optionally restricted to one
    /// muscle group, ordered by muscle group then name.
    pub async fn list_visible(
        pool: &SqlitePool,
        user_id: DbId,
        muscle_group: Option<&str>,
    ) -> Result<Vec<Exercise>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM exercises
             WHERE {VISIBLE_TO} AND ($2 IS NULL OR muscle_group = $2)
             ORDER BY muscle_group, name, id"
        );
        sqlx::query_as::<_, Exercise>(&query)
            .bind(user_id)
            .bind(muscle_group)
            .fetch_all(pool)
            .await
    }

    /// Distinct muscle groups visible to `user_id` with exercise counts.
    pub async fn list_muscle_groups(
        pool: &SqlitePool,
        user_id: DbId,
    ) -> Result<Vec<MuscleGroupCount>, sqlx::Error> {
        let query = format!(
            "SELECT muscle_group, COUNT(*) AS exercise_count FROM exercises
             WHERE {VISIBLE_TO}
             GROUP BY muscle_group
             ORDER BY muscle_group"
        );
        sqlx::query_as::<_, MuscleGroupCount>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Names of all predefined (owner-less) exercises.
    pub async fn global_names(pool: &SqlitePool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT name FROM exercises WHERE user_id IS NULL")
            .fetch_all(pool)
            .await
    }

    /// Update an exercise. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateExercise,
    ) -> Result<Option<Exercise>, sqlx::Error> {
        let query = format!(
            "UPDATE exercises SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                muscle_group = COALESCE($4, muscle_group)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Exercise>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.muscle_group)
            .fetch_optional(pool)
            .await
    }

    /// Number of workout entries (from any user) referencing the exercise.
    pub async fn count_workouts(pool: &SqlitePool, id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM workout_entries WHERE exercise_id = $1")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Permanently delete an exercise. Returns `true` if a row was removed.
    ///
    /// The schema rejects the delete while workout entries reference the row.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM exercises WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
