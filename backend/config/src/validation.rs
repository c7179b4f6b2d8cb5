//! Config validation with user-friendly error messages.

use crate::schema::GatewayConfig;
use thiserror::Error;

/// A config validation error with field path and message.
#[derive(Debug, Error)]
#[error("Config validation error at '{path}': {message}")]
pub struct ConfigValidationError {
    pub path: String,
    pub message: String,
}

/// A collection of validation errors found in one pass.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }

    fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }
}

/// Validate the config and return a report of all errors and warnings.
pub fn validate(config: &GatewayConfig) -> ValidationReport {
    let mut report = ValidationReport::default();
    validate_upstream(config, &mut report);
    validate_server(config, &mut report);
    report
}

fn validate_upstream(config: &GatewayConfig, report: &mut ValidationReport) {
    if config.api_key.trim().is_empty() {
        report.error("apiKey", "API key cannot be empty");
    }
    if config.model.trim().is_empty() {
        report.error("model", "Model id cannot be empty");
    }
    let url = config.upstream_url.as_str();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        report.error("upstreamUrl", format!("Expected an http(s) URL, got {url:?}"));
    } else if url.starts_with("http://") {
        report.warn("upstreamUrl", "Upstream URL is not HTTPS; the API key is sent in clear text");
    }
}

fn validate_server(config: &GatewayConfig, report: &mut ValidationReport) {
    if config.port == 0 {
        report.error("port", "Port must be between 1 and 65535");
    }
    if config.bind_address.trim().is_empty() {
        report.error("bindAddress", "Bind address cannot be empty");
    }
    match config.max_upload_bytes {
        None => report.warn("maxUploadBytes", "Upload size is unlimited; large uploads are held fully in memory"),
        Some(limit) if limit < 1024 => {
            report.warn("maxUploadBytes", format!("Upload limit of {limit} bytes rejects most images"))
        }
        Some(_) => {}
    }
}
