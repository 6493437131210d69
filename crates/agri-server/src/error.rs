//! Application error types and Axum response conversion.

use agri_core::PredictionError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::dto::{ErrorResponse, ValidationErrorResponse, ValidationIssue};

/// Application-level errors with HTTP status code mapping.
#[derive(Debug)]
pub enum AppError {
    /// The request body failed validation; one issue per offending field.
    Validation(Vec<ValidationIssue>),
    NotFound,
    MethodNotAllowed,
    Internal(String),
}

impl From<PredictionError> for AppError {
    fn from(err: PredictionError) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(detail) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationErrorResponse { detail }),
            )
                .into_response(),
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    detail: "Not Found".into(),
                }),
            )
                .into_response(),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                Json(ErrorResponse {
                    detail: "Method Not Allowed".into(),
                }),
            )
                .into_response(),
            AppError::Internal(detail) => {
                error!("Internal error: {}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse { detail })).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let issue = ValidationIssue::new("missing", &["body", "humidity"], "Field required");
        assert_eq!(
            AppError::Validation(vec![issue]).into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(AppError::NotFound.into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::MethodNotAllowed.into_response().status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            AppError::Internal("boom".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_prediction_error_becomes_internal() {
        let err: AppError = PredictionError::NonFinite(f64::INFINITY).into();
        match err {
            AppError::Internal(detail) => assert!(detail.contains("inf")),
            other => panic!("expected internal error, got {:?}", other),
        }
    }
}
