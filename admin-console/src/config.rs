//! Console configuration
//!
//! # Environment
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | CONSOLE_API_URL | https://firebliss-1.onrender.com | API base URL |
//! | CONSOLE_REQUEST_TIMEOUT_SECS | 30 | request timeout, 0 disables it |
//! | CONSOLE_TOKEN | - | bearer token |
//! | CONSOLE_DEMO | false | run against the built-in mock API |
//! | LOG_LEVEL | info | default log filter when RUST_LOG is unset |
//! | LOG_DIR | - | directory for daily rotating log files |

use console_client::ClientConfig;

#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    pub client: ClientConfig,
    /// Serve every request from the in-process mock API
    pub demo: bool,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl ConsoleConfig {
    /// Load `.env` if present, then read the environment
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self {
            client: ClientConfig::from_env(),
            demo: std::env::var("CONSOLE_DEMO")
                .ok()
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
        }
    }

    /// Base URL shown in the header
    pub fn target(&self) -> &str {
        if self.demo {
            "in-process demo API"
        } else {
            &self.client.base_url
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag(" YES "));
        assert!(parse_flag("1"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn test_target_reflects_demo() {
        let config = ConsoleConfig {
            client: ClientConfig::new("http://localhost:5000"),
            demo: false,
            log_level: "info".into(),
            log_dir: None,
        };
        assert_eq!(config.target(), "http://localhost:5000");
        let demo = ConsoleConfig { demo: true, ..config };
        assert_eq!(demo.target(), "in-process demo API");
    }
}
