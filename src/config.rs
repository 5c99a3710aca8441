//! Service configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`).
//!
//! | Variable               | Default            |
//! |------------------------|--------------------|
//! | `LISTEN_ADDR`          | `0.0.0.0:3000`     |
//! | `SALES_DATA_PATH`      | `data/sales.json`  |
//! | `REQUEST_TIMEOUT_SECS` | `30`               |
//! | `LOG_FORMAT`           | `pretty`           |

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::error::AnalyticsError;

/// Log output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable multi-field lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(AnalyticsError::InvalidConfig(format!(
                "LOG_FORMAT must be `pretty` or `json`, got `{other}`"
            ))),
        }
    }
}

/// Top-level service configuration.
///
/// Loaded once at startup via [`AnalyticsConfig::from_env`].
#[derive(Debug, Clone)]
pub struct AnalyticsConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:3000`).
    pub listen_addr: SocketAddr,

    /// JSON file holding the transaction record array.
    pub data_path: PathBuf,

    /// Per-request timeout.
    pub request_timeout: Duration,

    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            data_path: PathBuf::from("data/sales.json"),
            request_timeout: Duration::from_secs(30),
            log_format: LogFormat::Pretty,
        }
    }
}

impl AnalyticsConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::InvalidConfig`] if `LISTEN_ADDR` or
    /// `LOG_FORMAT` is set but cannot be parsed.
    pub fn from_env() -> Result<Self, AnalyticsError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`AnalyticsConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AnalyticsError> {
        let defaults = Self::default();

        let listen_addr = match lookup("LISTEN_ADDR") {
            Some(raw) => raw.parse::<SocketAddr>().map_err(|e| {
                AnalyticsError::InvalidConfig(format!("LISTEN_ADDR `{raw}`: {e}"))
            })?,
            None => defaults.listen_addr,
        };

        let data_path = lookup("SALES_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_path);

        let request_timeout = Duration::from_secs(parse_or(
            &lookup,
            "REQUEST_TIMEOUT_SECS",
            defaults.request_timeout.as_secs(),
        ));

        let log_format = match lookup("LOG_FORMAT") {
            Some(raw) => raw.parse::<LogFormat>()?,
            None => defaults.log_format,
        };

        Ok(Self {
            listen_addr,
            data_path,
            request_timeout,
            log_format,
        })
    }
}

/// Parses a variable as `T`, returning `default` on missing or invalid
/// values.
fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    lookup(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}
