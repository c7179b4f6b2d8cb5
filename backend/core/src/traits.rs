use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

use crate::types::DataUrl;

/// Hosted captioning service used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.bytez.com";
pub const DEFAULT_MODEL: &str = "Salesforce/blip-image-captioning-base";

/// Trait for remote image-captioning models.
///
/// A model takes one inline image and returns its raw JSON reply untouched;
/// picking the caption out of it is `caption::extract_caption`'s job.
#[async_trait]
pub trait CaptionModel: Send + Sync {
    /// Model identifier (e.g., "Salesforce/blip-image-captioning-base").
    fn name(&self) -> &str;

    /// Submit a single image and await the model's response.
    async fn run(&self, image: &DataUrl) -> Result<Value>;
}
