//! HTTP mapping for engine errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use ndgeo_core::{ErrorCategory, ErrorDetail, ErrorResponse, GeometryError};

/// Error returned by every handler
#[derive(Debug)]
pub enum ApiError {
    /// Rejected by the engine; status comes from the error itself
    Geometry(GeometryError),
    /// Shared state is unusable (poisoned lock)
    Internal(String),
}

impl From<GeometryError> for ApiError {
    fn from(err: GeometryError) -> Self {
        ApiError::Geometry(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Geometry(e) => StatusCode::from_u16(e.http_status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> ErrorResponse {
        match self {
            ApiError::Geometry(e) => e.to_error_response(),
            ApiError::Internal(message) => ErrorResponse {
                error: ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message: message.clone(),
                    category: ErrorCategory::Internal,
                    recoverable: false,
                },
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = self.body();
        tracing::warn!(status = status.as_u16(), code = %body.error.code, "{}", body.error.message);
        (status, Json(body)).into_response()
    }
}
