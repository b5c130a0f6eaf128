//! Route definitions for the `/progress` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::progress;
use crate::state::AppState;

/// Routes mounted at `/progress`.
///
/// ```text
/// GET /{exercise_id} -> get_exercise_progress
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{exercise_id}", get(progress::get_exercise_progress))
}
