//! Route definitions for the `/exercises` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::exercises;
use crate::state::AppState;

/// Routes mounted at `/exercises`.
///
/// ```text
/// GET    /                -> list
/// POST   /                -> create
/// GET    /muscle-groups   -> list_muscle_groups
/// GET    /{id}            -> get_by_id
/// PUT    /{id}            -> update (custom exercises only)
/// DELETE /{id}            -> delete (custom exercises only)
/// GET    /{id}/metrics    -> get_metrics
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(exercises::list).post(exercises::create))
        .route("/muscle-groups", get(exercises::list_muscle_groups))
        .route(
            "/{id}",
            get(exercises::get_by_id)
                .put(exercises::update)
                .delete(exercises::delete),
        )
        .route("/{id}/metrics", get(exercises::get_metrics))
}
