//! Handlers for the `/exercises` resource.
//!
//! Predefined exercises are readable by everyone and immutable through the
//! API. Custom exercises are readable and writable by their owner only; to
//! anyone else they do not exist.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use gymtrack_core::error::CoreError;
use gymtrack_core::metrics::{metric_config_for, MetricConfig};
use gymtrack_core::types::DbId;
use gymtrack_db::models::exercise::{CreateExercise, Exercise, UpdateExercise};
use gymtrack_db::repositories::ExerciseRepo;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Query parameters for `GET /exercises`.
#[derive(Debug, Deserialize)]
pub struct ExerciseListParams {
    pub muscle_group: Option<String>,
}

/// A visible muscle group with its metric configuration.
#[derive(Debug, Serialize)]
pub struct MuscleGroupSummary {
    pub muscle_group: String,
    pub exercise_count: i64,
    pub metrics: MetricConfig,
}

// ---------------------------------------------------------------------------
// Lookup helpers shared with other handlers
// ---------------------------------------------------------------------------

/// Load an exercise the user can see, or 404.
pub(crate) async fn find_visible_exercise(
    state: &AppState,
    id: DbId,
    user_id: DbId,
) -> AppResult<Exercise> {
    ExerciseRepo::find_visible(&state.pool, id, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Exercise", id)))
}

/// Load an exercise the user may modify.
///
/// 404 if it is invisible to the user, 403 if it is a predefined exercise.
async fn find_owned_exercise(state: &AppState, id: DbId, user_id: DbId) -> AppResult<Exercise> {
    let exercise = find_visible_exercise(state, id, user_id).await?;
    if exercise.is_global() {
        return Err(AppError::Core(CoreError::Forbidden(
            "Predefined exercises cannot be modified".into(),
        )));
    }
    Ok(exercise)
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/exercises
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<ExerciseListParams>,
) -> AppResult<Json<Vec<Exercise>>> {
    let exercises =
        ExerciseRepo::list_visible(&state.pool, user.user_id, params.muscle_group.as_deref())
            .await?;
    Ok(Json(exercises))
}

/// GET /api/exercises/muscle-groups
pub async fn list_muscle_groups(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<MuscleGroupSummary>>> {
    let groups = ExerciseRepo::list_muscle_groups(&state.pool, user.user_id)
        .await?
        .into_iter()
        .map(|group| MuscleGroupSummary {
            metrics: metric_config_for(&group.muscle_group),
            muscle_group: group.muscle_group,
            exercise_count: group.exercise_count,
        })
        .collect();
    Ok(Json(groups))
}

/// POST /api/exercises
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateExercise>,
) -> AppResult<(StatusCode, Json<Exercise>)> {
    input.validate()?;
    let exercise = ExerciseRepo::create(&state.pool, Some(user.user_id), &input).await?;

    tracing::info!(
        exercise_id = exercise.id,
        user_id = user.user_id,
        muscle_group = %exercise.muscle_group,
        "Custom exercise created",
    );

    Ok((StatusCode::CREATED, Json(exercise)))
}

/// GET /api/exercises/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Exercise>> {
    let exercise = find_visible_exercise(&state, id, user.user_id).await?;
    Ok(Json(exercise))
}

/// GET /api/exercises/{id}/metrics
///
/// Which metric the exercise is charted by, and its fallback.
pub async fn get_metrics(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<MetricConfig>> {
    let exercise = find_visible_exercise(&state, id, user.user_id).await?;
    Ok(Json(metric_config_for(&exercise.muscle_group)))
}

/// PUT /api/exercises/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateExercise>,
) -> AppResult<Json<Exercise>> {
    input.validate()?;
    find_owned_exercise(&state, id, user.user_id).await?;

    let exercise = ExerciseRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Exercise", id)))?;

    tracing::info!(exercise_id = id, user_id = user.user_id, "Exercise updated");

    Ok(Json(exercise))
}

/// DELETE /api/exercises/{id}
///
/// Refused with 409 while any workout entry still references the exercise.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    find_owned_exercise(&state, id, user.user_id).await?;

    let workouts = ExerciseRepo::count_workouts(&state.pool, id).await?;
    if workouts > 0 {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Exercise is referenced by {workouts} workout entries"
        ))));
    }

    if !ExerciseRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::not_found("Exercise", id)));
    }

    tracing::info!(exercise_id = id, user_id = user.user_id, "Exercise deleted");

    Ok(StatusCode::NO_CONTENT)
}
