//! Config defaults.

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";

pub const DEFAULT_PORT: u16 = 8000;

pub use glimpse_core::{DEFAULT_BASE_URL as DEFAULT_UPSTREAM_URL, DEFAULT_MODEL};

/// Default request body cap: 25 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

pub const DEFAULT_LOG_LEVEL: &str = "info";
