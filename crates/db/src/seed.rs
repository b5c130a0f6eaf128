//! Seeding of the predefined exercise catalog.

use std::collections::HashSet;

use gymtrack_core::catalog::PREDEFINED_EXERCISES;
use sqlx::SqlitePool;

use crate::models::exercise::CreateExercise;
use crate::repositories::ExerciseRepo;

/// Insert every catalog exercise whose name is not yet present among the
/// global exercises. Safe to run on every startup.
///
/// Returns the number of exercises added.
pub async fn seed_exercises(pool: &SqlitePool) -> Result<usize, sqlx::Error> {
    let existing: HashSet<String> = ExerciseRepo::global_names(pool)
        .await?
        .into_iter()
        .collect();
    tracing::debug!(existing = existing.len(), "Loaded existing catalog names");

    let mut added = 0;
    for exercise in PREDEFINED_EXERCISES {
        if existing.contains(exercise.name) {
            continue;
        }
        let input = CreateExercise {
            name: exercise.name.to_string(),
            description: Some(exercise.description.to_string()),
            muscle_group: exercise.muscle_group.to_string(),
        };
        ExerciseRepo::create(pool, None, &input).await?;
        tracing::debug!(name = exercise.name, muscle_group = exercise.muscle_group, "Seeded exercise");
        added += 1;
    }

    tracing::info!(added, total = PREDEFINED_EXERCISES.len(), "Exercise catalog seeded");
    Ok(added)
}
