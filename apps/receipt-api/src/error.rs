//! Error mapping for the receipt API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use receipt_core::Error;

/// Wrapper turning pipeline errors into HTTP responses
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] Error);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::InvalidMonth(_) => StatusCode::BAD_REQUEST,
            Error::BaseTemplateNotFound(_)
            | Error::IntermediateTemplateNotFound(_)
            | Error::DocumentNotFound { .. } => StatusCode::NOT_FOUND,
            Error::Render(e) => {
                tracing::error!("Render error: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Error::Io(e) => {
                tracing::error!("I/O error: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({
            "error": self.0.to_string(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
