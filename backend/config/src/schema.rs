//! Gateway configuration schema.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::defaults::*;

/// Console log output style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pretty => f.write_str("pretty"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Caption gateway runtime configuration.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayConfig {
    /// Captioning service credential
    pub api_key: String,
    /// HTTP server bind address
    pub bind_address: String,
    /// HTTP server port
    pub port: u16,
    /// Hosted captioning model id
    pub model: String,
    /// Captioning service base URL
    pub upstream_url: String,
    /// Request body cap in bytes; `None` means unlimited
    pub max_upload_bytes: Option<usize>,
    /// Log level or `EnvFilter` directive
    pub log_level: String,
    pub log_format: LogFormat,
    /// Directory for rolling log files
    pub log_dir: Option<PathBuf>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            model: DEFAULT_MODEL.to_string(),
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            max_upload_bytes: Some(DEFAULT_MAX_UPLOAD_BYTES),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: LogFormat::default(),
            log_dir: None,
        }
    }
}

impl GatewayConfig {
    /// `host:port` string the server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("api_key", &"***")
            .field("bind_address", &self.bind_address)
            .field("port", &self.port)
            .field("model", &self.model)
            .field("upstream_url", &self.upstream_url)
            .field("max_upload_bytes", &self.max_upload_bytes)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .field("log_dir", &self.log_dir)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_hides_api_key() {
        let config = GatewayConfig {
            api_key: "super-secret-key".into(),
            ..Default::default()
        };
        let printed = format!("{config:?}");
        assert!(!printed.contains("super-secret-key"));
        assert!(printed.contains("blip-image-captioning-base"));
    }

    #[test]
    fn bind_addr_joins_host_and_port() {
        assert_eq!(GatewayConfig::default().bind_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn upstream_defaults_match_the_model_client() {
        let config = GatewayConfig::default();
        assert_eq!(config.model, glimpse_core::DEFAULT_MODEL);
        assert_eq!(config.upstream_url, glimpse_core::DEFAULT_BASE_URL);
    }
}
