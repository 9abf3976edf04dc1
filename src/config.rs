//! Process configuration parsed from environment variables.
//!
//! Read once at startup, after `dotenvy` has merged an optional `.env` file
//! into the environment. Every value has a default so the demo boots with
//! an empty environment.

use std::path::PathBuf;
use std::time::Duration;

/// Key handed to new sessions when `OPENAI_API_KEY` is unset.
pub const MOCK_API_KEY: &str = "sk-mock-api-key-for-local-testing";
pub const DEFAULT_PORT: u16 = 8501;
pub const DEFAULT_LOG_FILE: &str = "app.log";
pub const DEFAULT_LOG_FILTER: &str = "info";
/// Sessions untouched for this long are dropped on the next store access.
pub const DEFAULT_SESSION_IDLE_TTL_SECS: u64 = 3600;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    /// Initial `api_key` of every new session.
    pub api_key: String,
    /// File the log sink appends to, alongside the console.
    pub log_file: PathBuf,
    /// Fallback tracing filter when `RUST_LOG` is unset.
    pub log_filter: String,
    pub cookie_secure: bool,
    pub session_idle_ttl: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            api_key: MOCK_API_KEY.to_owned(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
            cookie_secure: false,
            session_idle_ttl: Duration::from_secs(DEFAULT_SESSION_IDLE_TTL_SECS),
        }
    }
}

impl AppConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `OPENAI_API_KEY`: default [`MOCK_API_KEY`]
    /// - `PORT`: default 8501
    /// - `APP_LOG_FILE`: default `app.log`
    /// - `RUST_LOG`: default `info`
    /// - `COOKIE_SECURE`: default false
    /// - `SESSION_IDLE_TTL_SECS`: default 3600
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            port: lookup("PORT")
                .and_then(|raw| raw.trim().parse::<u16>().ok())
                .unwrap_or(defaults.port),
            api_key: lookup("OPENAI_API_KEY")
                .filter(|key| !key.is_empty())
                .unwrap_or(defaults.api_key),
            log_file: lookup("APP_LOG_FILE")
                .filter(|path| !path.trim().is_empty())
                .map_or(defaults.log_file, PathBuf::from),
            log_filter: lookup("RUST_LOG")
                .filter(|filter| !filter.trim().is_empty())
                .unwrap_or(defaults.log_filter),
            cookie_secure: lookup("COOKIE_SECURE")
                .as_deref()
                .and_then(parse_bool)
                .unwrap_or(defaults.cookie_secure),
            session_idle_ttl: lookup("SESSION_IDLE_TTL_SECS")
                .and_then(|raw| raw.trim().parse::<u64>().ok())
                .map_or(defaults.session_idle_ttl, Duration::from_secs),
        }
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
