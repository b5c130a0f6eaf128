pub mod auth;
pub mod exercises;
pub mod progress;
pub mod workouts;
