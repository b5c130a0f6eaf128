use crate::auth::jwt::JwtConfig;
use crate::middleware::rate_limit::RateLimitConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8001`).
    pub port: u16,
    /// SQLite connection string (default: `sqlite:gym_tracker.db?mode=rwc`).
    pub database_url: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Upper bound on graceful shutdown, in seconds (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// Whether to insert the predefined exercise catalog at startup.
    pub seed_exercises: bool,
    /// Per-client sliding-window request limit.
    pub rate_limit: RateLimitConfig,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                          |
    /// |---------------------------|----------------------------------|
    /// | `HOST`                    | `0.0.0.0`                        |
    /// | `PORT`                    | `8001`                           |
    /// | `DATABASE_URL`            | `sqlite:gym_tracker.db?mode=rwc` |
    /// | `CORS_ORIGINS`            | `http://localhost:3000`          |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                             |
    /// | `SHUTDOWN_TIMEOUT_SECS`   | `30`                             |
    /// | `SEED_EXERCISES`          | `true`                           |
    /// | `RATE_LIMIT_MAX_REQUESTS` | `100`                            |
    /// | `RATE_LIMIT_WINDOW_SECS`  | `60`                             |
    /// | `RATE_LIMIT_TRUST_PROXY`  | `false`                          |
    ///
    /// # Panics
    ///
    /// Panics on unparsable values so misconfiguration fails at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8001".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:gym_tracker.db?mode=rwc".into());

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        let seed_exercises: bool = std::env::var("SEED_EXERCISES")
            .unwrap_or_else(|_| "true".into())
            .parse()
            .expect("SEED_EXERCISES must be true or false");

        Self {
            host,
            port,
            database_url,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            seed_exercises,
            rate_limit: RateLimitConfig::from_env(),
            jwt: JwtConfig::from_env(),
        }
    }
}
