//! CLI Check Command
//!
//! Loads configuration from the environment, prints it with secrets
//! redacted, and reports validation problems.

use anyhow::Result;

use glimpse_config::{redact, validate, GatewayConfig};

/// Returns `Ok(false)` when the configuration would not start a server.
pub fn run() -> Result<bool> {
    println!("\n🔍 Checking Glimpse configuration...\n");

    let config = match GatewayConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            println!("  🔴 {e}");
            return Ok(false);
        }
    };

    println!("{}\n", serde_json::to_string_pretty(&redact(&config))?);

    let report = validate(&config);
    for warning in &report.warnings {
        println!("  🟡 {}: {}", warning.path, warning.message);
    }
    for error in &report.errors {
        println!("  🔴 {}: {}", error.path, error.message);
    }

    println!();
    if report.is_valid() {
        println!("✅ Configuration is valid.");
    } else {
        println!("❌ Configuration has errors. Please fix them above.");
    }

    Ok(report.is_valid())
}
