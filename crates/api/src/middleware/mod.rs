//! Request extractors and middleware.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`rate_limit`] -- Per-client sliding-window request limiting.

pub mod auth;
pub mod rate_limit;
