use std::sync::Mutex;

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde_json::Value;

use glimpse_core::{CaptionModel, DataUrl};

enum Reply {
    Response(Value),
    Failure(String),
}

/// A captioning model that returns a canned reply and remembers what it was sent.
pub struct MockCaptionModel {
    name: String,
    reply: Reply,
    received: Mutex<Vec<DataUrl>>,
}

impl MockCaptionModel {
    pub fn responding(response: Value) -> Self {
        Self::with_reply(Reply::Response(response))
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_reply(Reply::Failure(message.into()))
    }

    fn with_reply(reply: Reply) -> Self {
        Self {
            name: "mock".to_string(),
            reply,
            received: Mutex::new(Vec::new()),
        }
    }

    /// Data URLs received so far, in call order.
    pub fn received(&self) -> Vec<DataUrl> {
        self.received
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl CaptionModel for MockCaptionModel {
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self, image: &DataUrl) -> Result<Value> {
        if let Ok(mut calls) = self.received.lock() {
            calls.push(image.clone());
        }
        match &self.reply {
            Reply::Response(value) => Ok(value.clone()),
            Reply::Failure(message) => Err(anyhow!("{message}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn records_calls_and_replies() {
        let model = MockCaptionModel::responding(json!({ "output": "a cat" }));
        let image = DataUrl::encode(b"x", Some("image/png"));
        assert_eq!(model.run(&image).await.unwrap(), json!({ "output": "a cat" }));
        assert_eq!(model.received(), vec![image]);
    }

    #[tokio::test]
    async fn failure_message_is_verbatim() {
        let model = MockCaptionModel::failing("timeout");
        let err = model.run(&DataUrl::encode(b"x", None)).await.unwrap_err();
        assert_eq!(err.to_string(), "timeout");
    }
}
