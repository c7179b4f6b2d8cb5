//! Environment loading for the gateway config.
//!
//! Empty variables count as unset. Byte sizes accept a plain integer or a
//! `KB`/`KiB`/`MB`/`MiB`/`GB`/`GiB` suffix; `0` means unlimited.

use std::collections::HashMap;
use std::path::PathBuf;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::debug;

use crate::schema::{GatewayConfig, LogFormat};

pub const API_KEY_VARS: &[&str] = &["BYTEZ_API_KEY", "bytez_api_key"];
pub const BIND_VAR: &str = "GLIMPSE_BIND";
pub const PORT_VAR: &str = "GLIMPSE_PORT";
pub const MODEL_VAR: &str = "GLIMPSE_MODEL";
pub const UPSTREAM_URL_VAR: &str = "GLIMPSE_UPSTREAM_URL";
pub const MAX_UPLOAD_VAR: &str = "GLIMPSE_MAX_UPLOAD_BYTES";
pub const LOG_DIR_VAR: &str = "GLIMPSE_LOG_DIR";
pub const LOG_FORMAT_VAR: &str = "GLIMPSE_LOG_FORMAT";
pub const LOG_LEVEL_VAR: &str = "RUST_LOG";

static BYTE_SIZE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*([0-9]+)\s*(b|kb|kib|mb|mib|gb|gib)?\s*$").unwrap());

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing API key: set BYTEZ_API_KEY")]
    MissingApiKey,

    #[error("Invalid value {value:?} for {var}: {reason}")]
    InvalidValue {
        var: String,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    fn invalid(var: &str, value: &str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            var: var.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Load a `.env` file from the working directory or its parents, if present.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!(path = %path.display(), "Loaded .env file"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "Failed to load .env file"),
    }
}

impl GatewayConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(&std::env::vars().collect())
    }

    /// Load configuration from a provided map (useful for testing).
    pub fn from_env_map(env: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let get = |name: &str| env.get(name).map(|v| v.trim()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let api_key = API_KEY_VARS
            .iter()
            .find_map(|name| get(name))
            .ok_or(ConfigError::MissingApiKey)?
            .to_string();

        let port = match get(PORT_VAR) {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| ConfigError::invalid(PORT_VAR, raw, e.to_string()))?,
            None => defaults.port,
        };

        let max_upload_bytes = match get(MAX_UPLOAD_VAR) {
            Some(raw) => parse_byte_size(raw)
                .ok_or_else(|| ConfigError::invalid(MAX_UPLOAD_VAR, raw, "expected a byte size like 26214400 or 25MiB"))
                .map(|bytes| (bytes > 0).then_some(bytes))?,
            None => defaults.max_upload_bytes,
        };

        let log_format = match get(LOG_FORMAT_VAR) {
            Some(raw) => parse_log_format(raw)
                .ok_or_else(|| ConfigError::invalid(LOG_FORMAT_VAR, raw, "expected \"pretty\" or \"json\""))?,
            None => defaults.log_format,
        };

        Ok(Self {
            api_key,
            bind_address: get(BIND_VAR).map(str::to_owned).unwrap_or(defaults.bind_address),
            port,
            model: get(MODEL_VAR).map(str::to_owned).unwrap_or(defaults.model),
            upstream_url: get(UPSTREAM_URL_VAR)
                .map(str::to_owned)
                .unwrap_or(defaults.upstream_url),
            max_upload_bytes,
            log_level: get(LOG_LEVEL_VAR).map(str::to_owned).unwrap_or(defaults.log_level),
            log_format,
            log_dir: get(LOG_DIR_VAR).map(PathBuf::from),
        })
    }
}

/// Parse `1048576`, `512KB`, `25MiB`, ... into a byte count.
pub fn parse_byte_size(raw: &str) -> Option<usize> {
    let caps = BYTE_SIZE_PATTERN.captures(raw)?;
    let value: usize = caps[1].parse().ok()?;
    let unit = caps.get(2).map(|m| m.as_str().to_ascii_lowercase());
    let multiplier = match unit.as_deref() {
        None | Some("b") => 1,
        Some("kb") => 1_000,
        Some("kib") => 1 << 10,
        Some("mb") => 1_000_000,
        Some("mib") => 1 << 20,
        Some("gb") => 1_000_000_000,
        Some("gib") => 1 << 30,
        Some(_) => return None,
    };
    value.checked_mul(multiplier)
}

fn parse_log_format(raw: &str) -> Option<LogFormat> {
    match raw.to_ascii_lowercase().as_str() {
        "pretty" | "text" => Some(LogFormat::Pretty),
        "json" => Some(LogFormat::Json),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::DEFAULT_MAX_UPLOAD_BYTES;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn defaults_with_only_api_key() {
        let config = GatewayConfig::from_env_map(&env(&[("BYTEZ_API_KEY", "k")])).unwrap();
        assert_eq!(config.api_key, "k");
        assert_eq!(config.port, 8000);
        assert_eq!(config.bind_address, "0.0.0.0");
        assert_eq!(config.model, "Salesforce/blip-image-captioning-base");
        assert_eq!(config.max_upload_bytes, Some(DEFAULT_MAX_UPLOAD_BYTES));
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn lowercase_key_alias_is_accepted() {
        let config = GatewayConfig::from_env_map(&env(&[("bytez_api_key", "lower")])).unwrap();
        assert_eq!(config.api_key, "lower");
    }

    #[test]
    fn missing_or_blank_key_is_an_error() {
        assert_eq!(
            GatewayConfig::from_env_map(&HashMap::new()).unwrap_err(),
            ConfigError::MissingApiKey
        );
        assert_eq!(
            GatewayConfig::from_env_map(&env(&[("BYTEZ_API_KEY", "  ")])).unwrap_err(),
            ConfigError::MissingApiKey
        );
    }

    #[test]
    fn overrides_are_applied() {
        let config = GatewayConfig::from_env_map(&env(&[
            ("BYTEZ_API_KEY", "k"),
            ("GLIMPSE_PORT", "9000"),
            ("GLIMPSE_BIND", "127.0.0.1"),
            ("GLIMPSE_MODEL", "acme/captioner"),
            ("GLIMPSE_UPSTREAM_URL", "http://localhost:9999"),
            ("GLIMPSE_MAX_UPLOAD_BYTES", "0"),
            ("GLIMPSE_LOG_FORMAT", "JSON"),
            ("GLIMPSE_LOG_DIR", "/tmp/glimpse"),
            ("RUST_LOG", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
        assert_eq!(config.model, "acme/captioner");
        assert_eq!(config.upstream_url, "http://localhost:9999");
        assert_eq!(config.max_upload_bytes, None);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/glimpse")));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn bad_port_names_the_variable() {
        let err = GatewayConfig::from_env_map(&env(&[
            ("BYTEZ_API_KEY", "k"),
            ("GLIMPSE_PORT", "eighty"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("GLIMPSE_PORT"));
    }

    #[test]
    fn byte_sizes() {
        assert_eq!(parse_byte_size("1048576"), Some(1_048_576));
        assert_eq!(parse_byte_size("25MiB"), Some(25 * 1024 * 1024));
        assert_eq!(parse_byte_size("512 kb"), Some(512_000));
        assert_eq!(parse_byte_size("1GiB"), Some(1 << 30));
        assert_eq!(parse_byte_size("ten"), None);
        assert_eq!(parse_byte_size("-1"), None);
    }
}
