//! Server configuration
//!
//! All settings come from environment variables with sensible defaults:
//!
//! | variable | default | notes |
//! |----------|---------|-------|
//! | DATA_DIR | ./data | sqlite db location |
//! | HTTP_PORT | 3000 | |
//! | LOG_LEVEL | info | tracing filter level |
//! | LOG_DIR | (unset) | daily-rolling log files when set |
//! | PRICING_CONFIG | (unset) | JSON overriding currency/quantity tables |
//! | ENVIRONMENT | development | development \| production |

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the SQLite database
    pub data_dir: String,
    pub http_port: u16,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// Optional path to a JSON pricing-table override
    pub pricing_config: Option<String>,
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var("DATA_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
            pricing_config: std::env::var("PRICING_CONFIG").ok(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
