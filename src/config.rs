//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Example
//!
//! ```bash
//! export LISTEN="0.0.0.0:8080"
//! export BASE_URL="https://s.example.com"
//! export DEFAULT_VALIDITY_MINUTES="60"
//! export GEO_LOOKUP_URL="https://ipapi.co/{ip}/json/"
//! export LOG_SINK_URL="https://logs.example.com/api/logs"
//! export LOG_SINK_TOKEN="secret"
//! ```
//!
//! ## Optional Variables
//!
//! All variables are optional.
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `BASE_URL` - Prefix for generated short links (default: `http://localhost:8080`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `BEHIND_PROXY` - Trust `X-Forwarded-For` / `X-Real-IP` (default: `false`)
//! - `DEFAULT_VALIDITY_MINUTES` - Validity when a request has none (default: 30)
//! - `GEO_LOOKUP_ENABLED` - Resolve visitor locations over HTTP (default: `true`)
//! - `GEO_LOOKUP_URL` - Lookup endpoint, must contain `{ip}`
//! - `GEO_LOOKUP_TIMEOUT_SECS` - Per-lookup bound, 1-60 (default: 5)
//! - `LOG_SINK_URL` - Remote collector for application events (disabled if unset)
//! - `LOG_SINK_TOKEN` - Bearer token for the collector

use anyhow::Result;
use std::env;
use std::str::FromStr;

use crate::application::services::{DEFAULT_VALIDITY_MINUTES, MAX_VALIDITY_MINUTES};
use crate::infrastructure::geo::{DEFAULT_LOOKUP_TIMEOUT, DEFAULT_LOOKUP_URL};

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,
    /// When true, click attribution reads the client IP from X-Forwarded-For / X-Real-IP.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
    pub default_validity_minutes: i64,

    // ── Geolocation ─────────────────────────────────────────────────────────
    /// When false, every click is attributed to "Unknown Location".
    pub geo_lookup_enabled: bool,
    pub geo_lookup_url: String,
    pub geo_lookup_timeout_secs: u64,

    // ── Remote log sink ─────────────────────────────────────────────────────
    pub log_sink_url: Option<String>,
    pub log_sink_token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            base_url: "http://localhost:8080".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            behind_proxy: false,
            default_validity_minutes: DEFAULT_VALIDITY_MINUTES,
            geo_lookup_enabled: true,
            geo_lookup_url: DEFAULT_LOOKUP_URL.to_string(),
            geo_lookup_timeout_secs: DEFAULT_LOOKUP_TIMEOUT.as_secs(),
            log_sink_url: None,
            log_sink_token: None,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset variables keep their defaults. Unparseable numbers also fall
    /// back to the default.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let base_url = env::var("BASE_URL").unwrap_or(defaults.base_url);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let behind_proxy = parse_flag("BEHIND_PROXY").unwrap_or(defaults.behind_proxy);

        let default_validity_minutes =
            parse_var("DEFAULT_VALIDITY_MINUTES").unwrap_or(defaults.default_validity_minutes);

        let geo_lookup_enabled =
            parse_flag("GEO_LOOKUP_ENABLED").unwrap_or(defaults.geo_lookup_enabled);
        let geo_lookup_url = env::var("GEO_LOOKUP_URL").unwrap_or(defaults.geo_lookup_url);
        let geo_lookup_timeout_secs =
            parse_var("GEO_LOOKUP_TIMEOUT_SECS").unwrap_or(defaults.geo_lookup_timeout_secs);

        let log_sink_url = env::var("LOG_SINK_URL").ok().filter(|v| !v.is_empty());
        let log_sink_token = env::var("LOG_SINK_TOKEN").ok().filter(|v| !v.is_empty());

        Ok(Self {
            listen_addr,
            base_url,
            log_level,
            log_format,
            behind_proxy,
            default_validity_minutes,
            geo_lookup_enabled,
            geo_lookup_url,
            geo_lookup_timeout_secs,
            log_sink_url,
            log_sink_token,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `base_url` is not an http(s) URL
    /// - `default_validity_minutes` is outside 1..=525600
    /// - `geo_lookup_url` lacks the `{ip}` placeholder (when lookups are enabled)
    /// - `geo_lookup_timeout_secs` is outside 1..=60
    /// - `log_sink_url` is not an http(s) URL
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !is_http_url(&self.base_url) {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if !(1..=MAX_VALIDITY_MINUTES).contains(&self.default_validity_minutes) {
            anyhow::bail!(
                "DEFAULT_VALIDITY_MINUTES must be between 1 and {}, got {}",
                MAX_VALIDITY_MINUTES,
                self.default_validity_minutes
            );
        }

        if self.geo_lookup_enabled && !self.geo_lookup_url.contains("{ip}") {
            anyhow::bail!(
                "GEO_LOOKUP_URL must contain the '{{ip}}' placeholder, got '{}'",
                self.geo_lookup_url
            );
        }

        if self.geo_lookup_timeout_secs == 0 || self.geo_lookup_timeout_secs > 60 {
            anyhow::bail!(
                "GEO_LOOKUP_TIMEOUT_SECS must be between 1 and 60, got {}",
                self.geo_lookup_timeout_secs
            );
        }

        if let Some(ref sink) = self.log_sink_url
            && !is_http_url(sink)
        {
            anyhow::bail!(
                "LOG_SINK_URL must start with 'http://' or 'https://', got '{}'",
                sink
            );
        }

        Ok(())
    }

    /// Returns whether application events are shipped to a remote collector.
    pub fn is_log_sink_enabled(&self) -> bool {
        self.log_sink_url.is_some()
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Behind proxy: {}", self.behind_proxy);
        tracing::info!(
            "  Default validity: {} minutes",
            self.default_validity_minutes
        );

        if self.geo_lookup_enabled {
            tracing::info!(
                "  Geolocation: {} (timeout {}s)",
                self.geo_lookup_url,
                self.geo_lookup_timeout_secs
            );
        } else {
            tracing::info!("  Geolocation: disabled");
        }

        match (&self.log_sink_url, &self.log_sink_token) {
            (Some(url), Some(token)) => {
                tracing::info!("  Log sink: {} (token {})", url, mask_secret(token));
            }
            (Some(url), None) => tracing::info!("  Log sink: {} (no token)", url),
            (None, _) => tracing::info!("  Log sink: disabled"),
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

fn parse_flag(name: &str) -> Option<bool> {
    env::var(name)
        .ok()
        .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
}

fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// Masks a secret for logging, keeping only the first four characters.
///
/// - `abcdef123456` → `abcd***`
/// - `abc` → `***`
fn mask_secret(secret: &str) -> String {
    if secret.chars().count() <= 4 {
        return "***".to_string();
    }

    let prefix: String = secret.chars().take(4).collect();
    format!("{prefix}***")
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
