//! Handler for per-exercise progress statistics.

use axum::extract::{Path, State};
use axum::Json;
use gymtrack_core::progress::{compute_progress, ProgressStats};
use gymtrack_core::types::DbId;
use gymtrack_db::repositories::WorkoutRepo;

use crate::error::AppResult;
use crate::handlers::exercises::find_visible_exercise;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/progress/{exercise_id}
///
/// Charts the caller's history for one exercise by the metric its muscle
/// group prefers. Fails only when the exercise does not exist or belongs to
/// another user; no history yields a zero-valued result.
pub async fn get_exercise_progress(
    State(state): State<AppState>,
    user: AuthUser,
    Path(exercise_id): Path<DbId>,
) -> AppResult<Json<ProgressStats>> {
    let exercise = find_visible_exercise(&state, exercise_id, user.user_id).await?;

    let samples = WorkoutRepo::list_for_exercise(&state.pool, user.user_id, exercise_id)
        .await?
        .iter()
        .map(|entry| entry.to_progress_sample())
        .collect();

    let stats = compute_progress(&exercise.muscle_group, samples);

    tracing::debug!(
        exercise_id,
        user_id = user.user_id,
        total_sessions = stats.total_sessions,
        charted = stats.progress_data.len(),
        "Progress computed",
    );

    Ok(Json(stats))
}
