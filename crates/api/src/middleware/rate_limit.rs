//! Per-client sliding-window rate limiting.
//!
//! A single [`RateLimiter`] is created at startup and shared through
//! [`AppState`]. It keeps, for every client key, the instants of the requests
//! accepted inside the current window. All mutation happens under one lock,
//! so each key has exactly one writer at a time. State is process-local; a
//! multi-instance deployment needs an external store instead.

use std::collections::{HashMap, VecDeque};
use std::net::SocketAddr;
use std::time::{Duration, Instant};

use axum::extract::{ConnectInfo, Request, State};
use axum::middleware::Next;
use axum::response::Response;
use tokio::sync::Mutex;

use crate::error::AppError;
use crate::state::AppState;

/// Above this many tracked clients, idle keys are swept on the next check.
const MAX_TRACKED_CLIENTS: usize = 10_000;

/// Default number of requests allowed per window.
const DEFAULT_MAX_REQUESTS: usize = 100;
/// Default window length in seconds.
const DEFAULT_WINDOW_SECS: u64 = 60;

/// Sliding-window limit applied to each client.
#[derive(Debug, Clone, Copy)]
pub struct RateLimitConfig {
    pub max_requests: usize,
    pub window: Duration,
    /// Key clients on the first `X-Forwarded-For` hop instead of the peer
    /// address. Only safe behind a reverse proxy that overwrites the header.
    pub trust_forwarded_for: bool,
}

impl RateLimitConfig {
    /// Load from the environment.
    ///
    /// | Env Var                   | Default |
    /// |---------------------------|---------|
    /// | `RATE_LIMIT_MAX_REQUESTS` | `100`   |
    /// | `RATE_LIMIT_WINDOW_SECS`  | `60`    |
    /// | `RATE_LIMIT_TRUST_PROXY`  | `false` |
    ///
    /// # Panics
    ///
    /// Panics if any variable is set but unparsable.
    pub fn from_env() -> Self {
        let max_requests: usize = std::env::var("RATE_LIMIT_MAX_REQUESTS")
            .unwrap_or_else(|_| DEFAULT_MAX_REQUESTS.to_string())
            .parse()
            .expect("RATE_LIMIT_MAX_REQUESTS must be a valid usize");

        let window_secs: u64 = std::env::var("RATE_LIMIT_WINDOW_SECS")
            .unwrap_or_else(|_| DEFAULT_WINDOW_SECS.to_string())
            .parse()
            .expect("RATE_LIMIT_WINDOW_SECS must be a valid u64");

        let trust_forwarded_for: bool = std::env::var("RATE_LIMIT_TRUST_PROXY")
            .unwrap_or_else(|_| "false".into())
            .parse()
            .expect("RATE_LIMIT_TRUST_PROXY must be true or false");

        Self {
            max_requests,
            window: Duration::from_secs(window_secs),
            trust_forwarded_for,
        }
    }
}

/// In-memory sliding-window limiter keyed by client identity.
pub struct RateLimiter {
    config: RateLimitConfig,
    hits: Mutex<HashMap<String, VecDeque<Instant>>>,
}

impl RateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            hits: Mutex::new(HashMap::new()),
        }
    }

    /// Record a request from `key` now.
    ///
    /// Returns `Err(retry_after)` when the client already used its budget.
    pub async fn check(&self, key: &str) -> Result<(), Duration> {
        self.check_at(key, Instant::now()).await
    }

    /// Record a request from `key` at `now`.
    pub async fn check_at(&self, key: &str, now: Instant) -> Result<(), Duration> {
        let window = self.config.window;
        let mut hits = self.hits.lock().await;

        if hits.len() > MAX_TRACKED_CLIENTS {
            hits.retain(|_, times| {
                times
                    .back()
                    .is_some_and(|last| now.saturating_duration_since(*last) < window)
            });
        }

        let times = hits.entry(key.to_string()).or_default();
        while times
            .front()
            .is_some_and(|first| now.saturating_duration_since(*first) >= window)
        {
            times.pop_front();
        }

        if times.len() >= self.config.max_requests {
            let retry_after = times
                .front()
                .map(|first| window.saturating_sub(now.saturating_duration_since(*first)))
                .unwrap_or(window);
            return Err(retry_after);
        }

        times.push_back(now);
        Ok(())
    }
}

/// Identify the caller by peer address.
///
/// The first `X-Forwarded-For` hop is used instead only when
/// `trust_forwarded_for` is set; otherwise any client could pick its own key.
fn client_key(request: &Request, trust_forwarded_for: bool) -> String {
    if trust_forwarded_for {
        if let Some(forwarded) = request
            .headers()
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty())
        {
            return forwarded.to_string();
        }
    }

    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Middleware rejecting requests over the per-client limit with 429.
pub async fn rate_limit(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let key = client_key(&request, state.config.rate_limit.trust_forwarded_for);

    if let Err(retry_after) = state.rate_limiter.check(&key).await {
        tracing::warn!(client = %key, retry_after_secs = retry_after.as_secs(), "Rate limit exceeded");
        return Err(AppError::TooManyRequests {
            retry_after_secs: retry_after.as_secs().max(1),
        });
    }

    Ok(next.run(request).await)
}
