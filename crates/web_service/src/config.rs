//! Configuration management for web service
//!
//! Supports loading configuration from environment variables with fallback to defaults.

use std::time::Duration;

/// Runtime server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    pub session_ttl: Duration,
    pub session_sweep: Duration,
}

/// Load ServerConfig from environment variables
///
/// Environment variables:
/// - `APP_HOST`: Bind address (default: 127.0.0.1)
/// - `APP_PORT`: Bind port (default: 8080)
/// - `SERVER_WORKERS`: HTTP worker count (default: 4)
/// - `SESSION_TTL_SECS`: Session time-to-live in seconds (default: 3600)
/// - `SESSION_SWEEP_SECS`: Expired-session sweep interval in seconds (default: 60)
pub fn load_server_config() -> ServerConfig {
    ServerConfig {
        host: std::env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
        port: std::env::var("APP_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8080),
        workers: std::env::var("SERVER_WORKERS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(4),
        session_ttl: Duration::from_secs(
            std::env::var("SESSION_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3600),
        ),
        session_sweep: Duration::from_secs(
            std::env::var("SESSION_SWEEP_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        ),
    }
}
