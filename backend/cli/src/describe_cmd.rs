//! CLI Describe Command
//!
//! Uploads a local image to a running gateway as the `image` field.

use std::path::Path;

use anyhow::{bail, Context, Result};
use reqwest::multipart::{Form, Part};
use serde_json::Value;

use glimpse_core::{detect_mime_type, is_image};

pub async fn run(server: &str, file: &Path) -> Result<()> {
    let reply = describe_file(server, file).await?;
    println!("{}", serde_json::to_string_pretty(&reply)?);
    Ok(())
}

/// Post `file` to `{server}/describe` and return the gateway's JSON reply.
pub async fn describe_file(server: &str, file: &Path) -> Result<Value> {
    let bytes = tokio::fs::read(file)
        .await
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let mime = detect_mime_type(file);
    if !is_image(mime) {
        tracing::warn!(file = %file.display(), "Unrecognized image extension; sending as {mime}");
    }
    let file_name = file
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload")
        .to_string();

    let part = Part::bytes(bytes).file_name(file_name).mime_str(mime)?;
    let form = Form::new().part("image", part);

    let response = reqwest::Client::new()
        .post(format!("{}/describe", server.trim_end_matches('/')))
        .multipart(form)
        .send()
        .await
        .with_context(|| format!("Gateway is not reachable at {server}"))?;

    let status = response.status();
    let body: Value = response
        .json()
        .await
        .context("Gateway returned a non-JSON reply")?;
    if !status.is_success() {
        bail!("Gateway returned {}: {}", status, body);
    }

    Ok(body)
}
