use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::application::use_cases::{
    BulkArchiveError, FetchError, GenerateError, ListError,
};

/// API error response
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, message)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message,
        }));

        (self.status, body).into_response()
    }
}

// Convert use case errors to API errors

impl From<ListError> for ApiError {
    fn from(err: ListError) -> Self {
        match err {
            ListError::Repository(e) => {
                ApiError::internal_error(format!("Repository error: {}", e))
            }
        }
    }
}

impl From<BulkArchiveError> for ApiError {
    fn from(err: BulkArchiveError) -> Self {
        match err {
            BulkArchiveError::Empty => ApiError::not_found("No submissions to archive"),
            BulkArchiveError::Repository(e) => {
                ApiError::internal_error(format!("Repository error: {}", e))
            }
        }
    }
}

impl From<GenerateError> for ApiError {
    fn from(err: GenerateError) -> Self {
        match err {
            GenerateError::NotFound(msg) => ApiError::not_found(msg),
            GenerateError::TemplateUnavailable => {
                ApiError::service_unavailable("Master template unavailable")
            }
            GenerateError::Template(e) => {
                ApiError::internal_error(format!("Template error: {}", e))
            }
            GenerateError::Store(e) => {
                ApiError::internal_error(format!("Document store error: {}", e))
            }
            GenerateError::Repository(e) => {
                ApiError::internal_error(format!("Repository error: {}", e))
            }
        }
    }
}

impl From<FetchError> for ApiError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::SubmissionNotFound(msg) => ApiError::not_found(msg),
            FetchError::DocumentNotFound(msg) => {
                ApiError::not_found(format!("No generated document: {}", msg))
            }
            FetchError::Store(e) => {
                ApiError::internal_error(format!("Document store error: {}", e))
            }
            FetchError::Repository(e) => {
                ApiError::internal_error(format!("Repository error: {}", e))
            }
        }
    }
}
