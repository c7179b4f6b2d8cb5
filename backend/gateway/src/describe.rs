//! Caption endpoint (`POST /describe`).

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use glimpse_core::{extract_caption, CaptionModel, CaptionResult, DataUrl, GlimpseError};
use glimpse_logging::redact_sensitive_data;
use tracing::debug;

use crate::error::ApiError;
use crate::server::GatewayState;
use crate::upload::{parse_upload, UploadForm};

/// Handler for `POST /describe`.
pub async fn describe(
    State(state): State<GatewayState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<CaptionResult>, ApiError> {
    let multipart = multipart.map_err(|rejection| GlimpseError::Upload(rejection.body_text()))?;
    let form = parse_upload(multipart).await?;
    let result = caption_upload(state.model.as_ref(), form).await?;
    Ok(Json(result))
}

/// Caption the image held by a parsed form.
pub async fn caption_upload(
    model: &dyn CaptionModel,
    form: UploadForm,
) -> Result<CaptionResult, GlimpseError> {
    let upload = form.into_upload()?;
    let image = DataUrl::from_upload(&upload);
    debug!(
        upload_id = %upload.id,
        model = model.name(),
        media_type = image.media_type(),
        size_bytes = upload.len(),
        "Captioning upload"
    );

    let raw = model.run(&image).await.map_err(|e| {
        let err = GlimpseError::from(e);
        debug!(
            upload_id = %upload.id,
            error = %redact_sensitive_data(&err.to_string()),
            "Captioning model failed"
        );
        err
    })?;

    Ok(CaptionResult::new(extract_caption(&raw), raw))
}
