use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Json, Response},
    Extension,
};
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::application::dto::{AdminContext, GeneratedDocumentDto};
use crate::application::use_cases::{FetchDocumentUseCase, GenerateDocumentUseCase};
use crate::domain::value_objects::SubmissionId;

/// POST /v1/submissions/{id}/document
/// Stamp the master template for one submission and persist the result
#[utoipa::path(
    post,
    path = "/v1/submissions/{id}/document",
    tag = "documents",
    params(
        ("id" = String, Path, description = "Submission ID")
    ),
    responses(
        (status = 200, description = "Document generated", body = GeneratedDocumentDto),
        (status = 404, description = "Submission not found"),
        (status = 503, description = "Master template unavailable"),
        (status = 401, description = "Missing or invalid API key")
    )
)]
pub async fn generate_document_handler(
    State(use_case): State<Arc<GenerateDocumentUseCase>>,
    Path(id): Path<String>,
    Extension(ctx): Extension<AdminContext>,
) -> Result<Json<GeneratedDocumentDto>, ApiError> {
    let submission_id = id
        .parse::<SubmissionId>()
        .map_err(|e| ApiError::bad_request(format!("Invalid submission ID: {}", e)))?;

    let generated = use_case.execute(&submission_id, &ctx).await?;
    Ok(Json(generated))
}

/// GET /v1/submissions/{id}/document
/// Download the persisted document for a submission
#[utoipa::path(
    get,
    path = "/v1/submissions/{id}/document",
    tag = "documents",
    params(
        ("id" = String, Path, description = "Submission ID")
    ),
    responses(
        (status = 200, description = "Stored PDF document", content_type = "application/pdf"),
        (status = 404, description = "Submission or document not found"),
        (status = 401, description = "Missing or invalid API key")
    )
)]
pub async fn download_document_handler(
    State(use_case): State<Arc<FetchDocumentUseCase>>,
    Path(id): Path<String>,
    Extension(ctx): Extension<AdminContext>,
) -> Result<Response, ApiError> {
    let submission_id = id
        .parse::<SubmissionId>()
        .map_err(|e| ApiError::bad_request(format!("Invalid submission ID: {}", e)))?;

    let (key, bytes) = use_case.execute(&submission_id, &ctx).await?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/pdf")
        .header(header::CONTENT_LENGTH, bytes.len().to_string())
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename={}", key.file_name()),
        )
        .body(Body::from(bytes))
        .map_err(|e| ApiError::internal_error(format!("Failed to build response: {}", e)))
}
