//! Handlers for the `/workouts` resource.
//!
//! Entries are private to the user who logged them. Every entry carries at
//! least one raw metric and is dated no more than a day into the future; both
//! rules are re-checked against the merged entry on partial updates.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use gymtrack_core::error::CoreError;
use gymtrack_core::types::DbId;
use gymtrack_core::validation::validate_workout;
use gymtrack_db::models::workout::{CreateWorkoutEntry, UpdateWorkoutEntry, WorkoutEntryDetail};
use gymtrack_db::repositories::WorkoutRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::exercises::find_visible_exercise;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Query parameters for `GET /workouts`.
#[derive(Debug, Deserialize)]
pub struct WorkoutListParams {
    pub exercise_id: Option<DbId>,
}

async fn find_detail(state: &AppState, id: DbId, user_id: DbId) -> AppResult<WorkoutEntryDetail> {
    WorkoutRepo::find_detail(&state.pool, id, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("WorkoutEntry", id)))
}

/// GET /api/workouts
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<WorkoutListParams>,
) -> AppResult<Json<Vec<WorkoutEntryDetail>>> {
    let entries = WorkoutRepo::list_for_user(&state.pool, user.user_id, params.exercise_id).await?;
    Ok(Json(entries))
}

/// POST /api/workouts
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateWorkoutEntry>,
) -> AppResult<(StatusCode, Json<WorkoutEntryDetail>)> {
    input.validate()?;

    let now = Utc::now();
    let date = input.date.unwrap_or(now);
    validate_workout(&input.metrics(), date, now)?;

    find_visible_exercise(&state, input.exercise_id, user.user_id).await?;

    let entry = WorkoutRepo::create(&state.pool, user.user_id, date, &input).await?;

    tracing::info!(
        workout_id = entry.id,
        exercise_id = entry.exercise_id,
        user_id = user.user_id,
        "Workout logged",
    );

    let detail = find_detail(&state, entry.id, user.user_id).await?;
    Ok((StatusCode::CREATED, Json(detail)))
}

/// GET /api/workouts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<WorkoutEntryDetail>> {
    let detail = find_detail(&state, id, user.user_id).await?;
    Ok(Json(detail))
}

/// PUT /api/workouts/{id}
///
/// Partial update: only supplied fields change.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateWorkoutEntry>,
) -> AppResult<Json<WorkoutEntryDetail>> {
    input.validate()?;

    let existing = WorkoutRepo::find_by_id(&state.pool, id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("WorkoutEntry", id)))?;

    let merged = existing.merged_with(&input);
    validate_workout(&merged.metrics(), merged.date, Utc::now())?;

    if let Some(exercise_id) = input.exercise_id {
        find_visible_exercise(&state, exercise_id, user.user_id).await?;
    }

    WorkoutRepo::update(&state.pool, id, user.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("WorkoutEntry", id)))?;

    tracing::info!(workout_id = id, user_id = user.user_id, "Workout updated");

    let detail = find_detail(&state, id, user.user_id).await?;
    Ok(Json(detail))
}

/// DELETE /api/workouts/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !WorkoutRepo::delete(&state.pool, id, user.user_id).await? {
        return Err(AppError::Core(CoreError::not_found("WorkoutEntry", id)));
    }

    tracing::info!(workout_id = id, user_id = user.user_id, "Workout deleted");

    Ok(StatusCode::NO_CONTENT)
}
