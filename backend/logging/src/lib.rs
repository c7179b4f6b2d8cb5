//! Structured logging for the Glimpse gateway.
//!
//! Console output (pretty or JSON), optional rolling NDJSON files, and
//! redaction of credentials and inline image payloads.

pub mod logger;
pub mod redact;

pub use logger::{init_logger, LogOptions};
pub use redact::redact_sensitive_data;
