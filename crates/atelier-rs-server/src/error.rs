//! API error mapping.

use atelier_rs_core::StylistError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;
use serde_json::json;

/// A user-facing API failure: explicit status code plus a short detail
/// string. Internal detail stays in the server logs.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    /// Upstream dependency failed.
    pub fn bad_gateway(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            detail: detail.into(),
        }
    }
}

impl From<StylistError> for ApiError {
    fn from(err: StylistError) -> Self {
        match err {
            StylistError::InvalidRequest(message) => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                detail: message,
            },
            StylistError::NotConfigured => Self {
                status: StatusCode::SERVICE_UNAVAILABLE,
                detail: "completion provider is not configured".to_string(),
            },
            StylistError::Completion(inner) => {
                error!("completion failed (error={inner})");
                Self {
                    status: StatusCode::BAD_GATEWAY,
                    detail: "outfit generation failed upstream".to_string(),
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}
