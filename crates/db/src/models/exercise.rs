//! Exercise entity model and DTOs.

use gymtrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// An exercise row from the `exercises` table.
///
/// `user_id` is `None` for predefined exercises, which every user can see.
/// Custom exercises are visible to their owner only.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Exercise {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub muscle_group: String,
    pub user_id: Option<DbId>,
    pub created_at: Timestamp,
}

impl Exercise {
    pub fn is_global(&self) -> bool {
        self.user_id.is_none()
    }

    pub fn is_visible_to(&self, user_id: DbId) -> bool {
        self.user_id.is_none() || self.user_id == Some(user_id)
    }
}

/// DTO for creating a custom exercise.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateExercise {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 1000))]
    pub description: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub muscle_group: String,
}

/// DTO for updating an exercise. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateExercise {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(max = 1000))]
    pub description: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub muscle_group: Option<String>,
}

/// A muscle group visible to a user and how many exercises it holds.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MuscleGroupCount {
    pub muscle_group: String,
    pub exercise_count: i64,
}
