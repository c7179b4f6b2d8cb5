use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::mime_detect::media_subtype;

/// Metadata for one file part of a multipart upload.
///
/// The `id` is generated per part and is the only link between the
/// descriptor and its buffered bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    pub id: Uuid,
    pub file_name: Option<String>,
    pub mime_type: Option<String>,
}

/// A fully buffered image, ready to be encoded.
#[derive(Debug, Clone)]
pub struct Upload {
    pub id: Uuid,
    pub mime_type: Option<String>,
    pub bytes: Bytes,
}

impl Upload {
    pub fn new(descriptor: &FileDescriptor, bytes: Bytes) -> Self {
        Self {
            id: descriptor.id,
            mime_type: descriptor.mime_type.clone(),
            bytes,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }
}

/// An image embedded inline as `data:image/<png|jpeg>;base64,<payload>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataUrl(String);

impl DataUrl {
    /// Encode raw bytes, tagging them `png` or `jpeg` from the declared type.
    pub fn encode(bytes: &[u8], mime_type: Option<&str>) -> Self {
        let subtype = media_subtype(mime_type.unwrap_or_default());
        Self(format!("data:image/{};base64,{}", subtype, STANDARD.encode(bytes)))
    }

    pub fn from_upload(upload: &Upload) -> Self {
        Self::encode(&upload.bytes, upload.mime_type.as_deref())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Media type portion, e.g. `image/png`.
    pub fn media_type(&self) -> &str {
        self.0
            .strip_prefix("data:")
            .and_then(|rest| rest.split(';').next())
            .unwrap_or_default()
    }

    /// Length of the base64 payload, for logging without the payload itself.
    pub fn payload_len(&self) -> usize {
        self.0.split_once(',').map(|(_, p)| p.len()).unwrap_or(0)
    }
}

impl fmt::Display for DataUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Successful reply for `POST /describe`.
///
/// Field order is the wire order: `caption`, `raw`, `success`. The caption is
/// usually a string but is passed through with whatever JSON type the model
/// used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionResult {
    pub caption: Option<Value>,
    pub raw: Value,
    pub success: bool,
}

impl CaptionResult {
    pub fn new(caption: Option<Value>, raw: Value) -> Self {
        Self {
            caption,
            raw,
            success: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn png_data_url() {
        let url = DataUrl::encode(b"abc", Some("image/png"));
        assert_eq!(url.as_str(), "data:image/png;base64,YWJj");
        assert_eq!(url.media_type(), "image/png");
        assert_eq!(url.payload_len(), 4);
    }

    #[test]
    fn unknown_types_are_tagged_jpeg() {
        assert_eq!(
            DataUrl::encode(b"abc", Some("image/gif")).as_str(),
            "data:image/jpeg;base64,YWJj"
        );
        assert_eq!(DataUrl::encode(b"abc", None).media_type(), "image/jpeg");
    }

    #[test]
    fn upload_keeps_descriptor_id_and_type() {
        let descriptor = FileDescriptor {
            id: Uuid::new_v4(),
            file_name: Some("cat.png".into()),
            mime_type: Some("image/png".into()),
        };
        let upload = Upload::new(&descriptor, Bytes::from_static(b"\x89PNG"));
        assert_eq!(upload.id, descriptor.id);
        assert_eq!(upload.len(), 4);
        assert!(DataUrl::from_upload(&upload).as_str().starts_with("data:image/png;"));
    }

    #[test]
    fn caption_result_wire_format() {
        let result = CaptionResult::new(Some(json!("a cat")), json!({ "output": "a cat" }));
        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            r#"{"caption":"a cat","raw":{"output":"a cat"},"success":true}"#
        );

        let empty = CaptionResult::new(None, json!({}));
        assert_eq!(
            serde_json::to_string(&empty).unwrap(),
            r#"{"caption":null,"raw":{},"success":true}"#
        );

        let list = CaptionResult::new(Some(json!(["a cat"])), json!({ "output": ["a cat"] }));
        assert_eq!(
            serde_json::to_string(&list).unwrap(),
            r#"{"caption":["a cat"],"raw":{"output":["a cat"]},"success":true}"#
        );
    }
}
