//! Client configuration

use std::time::Duration;

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://firebliss-1.onrender.com";

/// Client configuration for connecting to the business API
///
/// # Environment
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | CONSOLE_API_URL | https://firebliss-1.onrender.com | API base URL |
/// | CONSOLE_REQUEST_TIMEOUT_SECS | 30 | request timeout, 0 disables it |
/// | CONSOLE_TOKEN | - | bearer token sent with every request |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:5000")
    pub base_url: String,

    /// Bearer token for authentication
    pub token: Option<String>,

    /// Request timeout in seconds, 0 for none
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
        }
    }

    /// Load from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let mut config = Self::new(
            std::env::var("CONSOLE_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into()),
        );
        if let Some(timeout) = std::env::var("CONSOLE_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|t| t.parse().ok())
        {
            config.timeout = timeout;
        }
        config.token = std::env::var("CONSOLE_TOKEN").ok().filter(|t| !t.is_empty());
        config
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Timeout as a `Duration`, `None` when disabled
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.timeout > 0).then(|| Duration::from_secs(self.timeout))
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> crate::ClientResult<crate::NetworkHttpClient> {
        crate::NetworkHttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
