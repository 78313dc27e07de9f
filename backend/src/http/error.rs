//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::services::SkyError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable error message
    pub detail: String,
}

impl ApiError {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Unknown path
    NotFound,
    /// Internal server error
    Internal(String),
    /// Sky service error (catalog unavailable)
    Sky(SkyError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, ApiError::new("Not Found")),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, ApiError::new(msg)),
            AppError::Sky(e) => {
                log::error!("Sky computation failed: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, ApiError::new(e.to_string()))
            }
        };

        (status, Json(error)).into_response()
    }
}

impl From<SkyError> for AppError {
    fn from(err: SkyError) -> Self {
        AppError::Sky(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogError;

    #[test]
    fn test_not_found_status() {
        let response = AppError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_sky_error_is_internal() {
        let err = AppError::from(SkyError::from(CatalogError::Unavailable("gone".to_string())));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_internal_is_500() {
        let response = AppError::Internal("Task join error: cancelled".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_api_error_body() {
        let body = serde_json::to_value(ApiError::new("Not Found")).unwrap();
        assert_eq!(body, serde_json::json!({ "detail": "Not Found" }));
    }
}
