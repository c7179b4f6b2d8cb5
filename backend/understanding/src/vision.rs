//! Vision understanding: caption images with a hosted captioning model.

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use glimpse_core::{CaptionModel, DataUrl, DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Bytez-hosted captioning model.
pub struct BytezModel {
    client: Client,
    api_key: String,
    model_id: String,
    base_url: String,
}

impl BytezModel {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model_id: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/models/v2/{}", self.base_url, self.model_id)
    }
}

#[derive(Serialize)]
struct RunRequest<'a> {
    base64: &'a str,
}

#[async_trait]
impl CaptionModel for BytezModel {
    fn name(&self) -> &str {
        &self.model_id
    }

    async fn run(&self, image: &DataUrl) -> Result<Value> {
        debug!(
            model = %self.model_id,
            media_type = image.media_type(),
            payload_len = image.payload_len(),
            "Sending image to captioning model"
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("Authorization", format!("Key {}", self.api_key))
            .json(&RunRequest { base64: image.as_str() })
            .send()
            .await
            .context("Captioning HTTP request failed")?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            bail!("{} returned {}: {}", self.model_id, status, error_body);
        }

        response
            .json()
            .await
            .context("Failed to parse captioning response")
    }
}
