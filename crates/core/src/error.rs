use crate::types::DbId;

/// Domain-level failures shared by every layer of the tracker.
///
/// Handlers never build HTTP statuses directly; they return one of these and
/// the API crate maps it to a response.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The referenced row does not exist, or exists but is not visible to the
    /// requesting user (the two cases are deliberately indistinguishable).
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// Input failed a field or invariant check.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The operation would break uniqueness or referential integrity
    /// (duplicate email, deleting an exercise that still has workouts).
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated, but the row belongs to the global catalog or another user.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub fn not_found(entity: &'static str, id: DbId) -> Self {
        Self::NotFound { entity, id }
    }
}
