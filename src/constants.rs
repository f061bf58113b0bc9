// ABOUTME: Centralized constants and environment-based configuration values
// ABOUTME: Groups endpoint defaults, window limits, and env-var getters in one place
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Environment-based configuration with sensible defaults
pub mod env_config {
    use std::env;

    /// Get the GitHub GraphQL endpoint from environment or default
    #[must_use]
    pub fn github_graphql_url() -> String {
        env::var("GITHUB_GRAPHQL_URL")
            .unwrap_or_else(|_| "https://api.github.com/graphql".to_string())
    }

    /// Get HTTP request timeout in seconds from environment or default
    #[must_use]
    pub fn http_timeout_secs() -> u64 {
        env::var("SEQHUB_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30)
    }

    /// Get HTTP connect timeout in seconds from environment or default
    #[must_use]
    pub fn http_connect_timeout_secs() -> u64 {
        env::var("SEQHUB_HTTP_CONNECT_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10)
    }

    /// Get log level from environment or default
    #[must_use]
    pub fn log_level() -> String {
        env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string())
    }
}

/// Window and amplitude limits
pub mod limits {
    /// Number of most-recent days kept in the normalized window
    pub const WINDOW_DAYS: usize = 360;

    /// Upper bound of the normalized intensity range
    pub const MAX_INTENSITY: f32 = 10.0;
}

/// HTTP client identity
pub mod http {
    /// User agent sent with every API request (GitHub rejects anonymous agents)
    pub const USER_AGENT: &str = concat!("seqhub/", env!("CARGO_PKG_VERSION"));
}
