//! Runtime configuration for the quote binary.
//!
//! Pricing rules are fixed constants; only logging is configurable.

use std::env;

/// Log filter used when none is configured or the configured one is invalid
pub const DEFAULT_LOG_FILTER: &str = "rental_quote=info";

/// Binary configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
    /// Emit JSON log lines instead of human-readable ones
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_json: false,
        }
    }
}

impl Config {
    /// Load configuration from `.env` (if present) and the environment
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Blank or unparseable values keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();

        if let Some(filter) = lookup("RENTAL_QUOTE_LOG").filter(|v| !v.trim().is_empty()) {
            cfg.log_filter = filter.trim().to_string();
        }

        if let Some(json) = lookup("RENTAL_QUOTE_LOG_JSON").and_then(|v| parse_flag(&v)) {
            cfg.log_json = json;
        }

        cfg
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
