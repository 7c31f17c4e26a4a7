//! HTTP-facing error type for the lookup service.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Lookup failures rendered as `{"error": {code, message, details}}`.
///
/// Snapshot read failures never surface here: the lookup service treats an
/// unreadable snapshot as an empty catalog.
#[derive(Debug)]
pub enum AppError {
    NotFound { message: String, details: Value },
}

impl AppError {
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::NotFound { message, .. } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_not_found_display() {
        let error = AppError::not_found("Product Біг Мак not found", json!({}));

        assert_eq!(error.to_string(), "Product Біг Мак not found");
    }

    #[test]
    fn test_not_found_status() {
        let response =
            AppError::not_found("Product data not found", json!({})).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
