//! HTTP mapping for gateway errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use glimpse_core::GlimpseError;

/// Wraps [`GlimpseError`] so handlers can return it directly.
#[derive(Debug)]
pub struct ApiError(pub GlimpseError);

impl From<GlimpseError> for ApiError {
    fn from(err: GlimpseError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.0.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;

    #[test]
    fn maps_status_and_sets_json_content_type() {
        let response = ApiError(GlimpseError::NoImage).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );

        let response = ApiError(GlimpseError::Upstream("boom".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
