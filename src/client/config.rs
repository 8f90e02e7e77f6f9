//! Client configuration.

use std::time::Duration;

/// Default server URL
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Default per-request timeout. Every call must settle eventually so the
/// session store can leave its loading state; nothing waits unbounded.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client configuration wrapper.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    server_url: String,
    timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let server_url =
            std::env::var("API_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        Self {
            server_url,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Create a configuration pointing at the given server.
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn server_url(&self) -> &str {
        self.server_url.trim_end_matches('/')
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url(), path)
    }
}
