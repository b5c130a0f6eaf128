pub mod auth;
pub mod exercises;
pub mod health;
pub mod progress;
pub mod workouts;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                    register (public)
/// /auth/login                       login (public)
/// /auth/me                          current user
///
/// /exercises                        list (?muscle_group), create
/// /exercises/muscle-groups          visible groups with metric config
/// /exercises/{id}                   get, update, delete
/// /exercises/{id}/metrics           metric config for the exercise
///
/// /workouts                         list (?exercise_id), create
/// /workouts/{id}                    get, update, delete
///
/// /progress/{exercise_id}           progress statistics
/// ```
///
/// Everything except register and login requires a bearer token.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/exercises", exercises::router())
        .nest("/workouts", workouts::router())
        .nest("/progress", progress::router())
}
