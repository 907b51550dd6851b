//! Application configuration
//!
//! Environment variables with defaults. The service origin is fixed; only
//! client-side knobs are configurable.

use std::env;

/// Origin of the search/chat service
pub const API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// HTTP client configuration
    pub http: HttpConfig,
    /// Window configuration
    pub window: WindowConfig,
}

/// HTTP client configuration
#[derive(Debug, Clone, PartialEq)]
pub struct HttpConfig {
    /// Base URL of the service (always `API_BASE_URL` outside tests)
    pub base_url: String,
    /// Per-request timeout (in seconds)
    pub request_timeout_secs: u64,
}

/// Initial window size
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    /// Width in logical pixels
    pub width: f32,
    /// Height in logical pixels
    pub height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http: HttpConfig {
                base_url: API_BASE_URL.to_string(),
                request_timeout_secs: 30,
            },
            window: WindowConfig {
                width: 1200.0,
                height: 800.0,
            },
        }
    }
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            http: HttpConfig {
                base_url: defaults.http.base_url,
                request_timeout_secs: env::var("STOREFRONT_REQUEST_TIMEOUT_SECS")
                    .ok()
                    .and_then(|t| t.parse().ok())
                    .filter(|t| *t > 0)
                    .unwrap_or(defaults.http.request_timeout_secs),
            },
            window: WindowConfig {
                width: env::var("STOREFRONT_WINDOW_WIDTH")
                    .ok()
                    .and_then(|w| w.parse().ok())
                    .unwrap_or(defaults.window.width),
                height: env::var("STOREFRONT_WINDOW_HEIGHT")
                    .ok()
                    .and_then(|h| h.parse().ok())
                    .unwrap_or(defaults.window.height),
            },
        }
    }
}
