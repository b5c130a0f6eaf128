//! Domain core for the gym tracker backend.
//!
//! Pure logic only: no database or HTTP dependencies live here, so everything
//! in this crate is unit-testable in isolation.

pub mod catalog;
pub mod error;
pub mod metrics;
pub mod progress;
pub mod types;
pub mod validation;
