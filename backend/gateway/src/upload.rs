//! Multipart upload parsing.
//!
//! The parser hands back everything it buffered as an [`UploadForm`] value;
//! nothing is stashed in shared state between parsing and captioning.

use std::collections::HashMap;

use axum::extract::Multipart;
use bytes::Bytes;
use glimpse_core::{FileDescriptor, GlimpseError, Upload};
use tracing::debug;
use uuid::Uuid;

/// Multipart field that carries the image.
pub const IMAGE_FIELD: &str = "image";

/// Result of parsing one multipart body.
#[derive(Debug, Default)]
pub struct UploadForm {
    image: Option<FileDescriptor>,
    buffers: HashMap<Uuid, Bytes>,
}

impl UploadForm {
    pub fn new(image: Option<FileDescriptor>, buffers: HashMap<Uuid, Bytes>) -> Self {
        Self { image, buffers }
    }

    /// Descriptor of the first file submitted under [`IMAGE_FIELD`].
    pub fn image(&self) -> Option<&FileDescriptor> {
        self.image.as_ref()
    }

    /// Resolve the image descriptor against its buffered bytes.
    pub fn into_upload(mut self) -> Result<Upload, GlimpseError> {
        let descriptor = self.image.take().ok_or(GlimpseError::NoImage)?;
        let bytes = self
            .buffers
            .remove(&descriptor.id)
            .ok_or(GlimpseError::BufferMissing)?;
        Ok(Upload::new(&descriptor, bytes))
    }
}

/// Read the whole multipart body, buffering the first image file in memory.
///
/// Later files under the same field and all other parts are read through and
/// dropped, so a malformed tail still fails the whole upload.
pub async fn parse_upload(mut multipart: Multipart) -> Result<UploadForm, GlimpseError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| GlimpseError::Upload(e.body_text()))?
    {
        let is_image_file = field.name() == Some(IMAGE_FIELD) && field.file_name().is_some();
        if !is_image_file || form.image.is_some() {
            debug!(field = ?field.name(), "Skipping multipart field");
            continue;
        }

        let descriptor = FileDescriptor {
            id: Uuid::new_v4(),
            file_name: field.file_name().map(str::to_owned),
            mime_type: field.content_type().map(str::to_owned),
        };
        let bytes = field
            .bytes()
            .await
            .map_err(|e| GlimpseError::Upload(e.body_text()))?;

        debug!(
            upload_id = %descriptor.id,
            file_name = ?descriptor.file_name,
            mime = ?descriptor.mime_type,
            size_bytes = bytes.len(),
            "Buffered image upload"
        );
        form.buffers.insert(descriptor.id, bytes);
        form.image = Some(descriptor);
    }

    Ok(form)
}
