//! `glimpse-config`: caption gateway configuration.
//!
//! Provides:
//! - Typed config schema with defaults
//! - Environment loading (with optional `.env` file)
//! - Validation with errors and warnings
//! - Redaction for safe logging/display

pub mod defaults;
pub mod env;
pub mod redact;
pub mod schema;
pub mod validation;

pub use env::{load_dotenv, ConfigError};
pub use redact::redact;
pub use schema::{GatewayConfig, LogFormat};
pub use validation::{validate, ConfigValidationError, ValidationReport};

use anyhow::Result;

/// Validate a loaded config, logging warnings and rejecting errors.
pub fn ensure_valid(config: GatewayConfig) -> Result<GatewayConfig> {
    let report = validate(&config);
    for warning in &report.warnings {
        tracing::warn!(path = %warning.path, message = %warning.message, "Config warning");
    }
    for error in &report.errors {
        tracing::error!(path = %error.path, message = %error.message, "Config error");
    }
    if let Some(first) = report.errors.into_iter().next() {
        return Err(first.into());
    }

    Ok(config)
}
