//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument.

pub mod exercise_repo;
pub mod user_repo;
pub mod workout_repo;

pub use exercise_repo::ExerciseRepo;
pub use user_repo::UserRepo;
pub use workout_repo::WorkoutRepo;
