use serde_json::{json, Value};
use thiserror::Error;

/// Every way a caption request can end without a caption.
///
/// Each variant maps to exactly one HTTP status and JSON body, so callers
/// always get a structured error instead of an empty reply.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GlimpseError {
    /// The multipart body could not be parsed.
    #[error("Upload error: {0}")]
    Upload(String),

    #[error("No image uploaded")]
    NoImage,

    /// The parser reported a file but its bytes were never buffered.
    #[error("Buffer missing")]
    BufferMissing,

    /// The captioning service failed; the message is passed through verbatim.
    #[error("{0}")]
    Upstream(String),

    #[error("Not found")]
    NotFound,
}

impl GlimpseError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Upload(_) | Self::NoImage => 400,
            Self::NotFound => 404,
            Self::BufferMissing | Self::Upstream(_) => 500,
        }
    }

    /// JSON body sent back to the caller.
    pub fn body(&self) -> Value {
        match self {
            Self::Upload(err) => json!({ "error": "Upload error", "err": err }),
            Self::NoImage => json!({ "error": "No image uploaded" }),
            Self::BufferMissing => json!({ "error": "Buffer missing" }),
            Self::Upstream(message) => json!({ "error": message }),
            Self::NotFound => json!({ "error": "Not found" }),
        }
    }
}

impl From<anyhow::Error> for GlimpseError {
    fn from(err: anyhow::Error) -> Self {
        Self::Upstream(format!("{err:#}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_error_carries_parser_message() {
        let err = GlimpseError::Upload("missing boundary".into());
        assert_eq!(err.status_code(), 400);
        assert_eq!(
            err.body(),
            json!({ "error": "Upload error", "err": "missing boundary" })
        );
    }

    #[test]
    fn upstream_message_is_verbatim() {
        let err: GlimpseError = anyhow::anyhow!("timeout").into();
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.body(), json!({ "error": "timeout" }));
    }

    #[test]
    fn upstream_message_keeps_context_chain() {
        let err: GlimpseError = anyhow::anyhow!("connection refused")
            .context("request failed")
            .into();
        assert_eq!(err, GlimpseError::Upstream("request failed: connection refused".into()));
    }

    #[test]
    fn fixed_bodies() {
        assert_eq!(GlimpseError::NotFound.status_code(), 404);
        assert_eq!(GlimpseError::NotFound.body(), json!({ "error": "Not found" }));
        assert_eq!(GlimpseError::NoImage.body(), json!({ "error": "No image uploaded" }));
        assert_eq!(GlimpseError::BufferMissing.status_code(), 500);
    }
}
