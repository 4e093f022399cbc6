use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::Response,
    Extension,
};
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::application::dto::AdminContext;
use crate::application::use_cases::{BulkArchiveUseCase, ARCHIVE_FILE_NAME};

/// GET /v1/submissions/archive
/// Stream every submission as a single ZIP archive.
///
/// Headers go out before the first entry; anything that fails after that
/// can only truncate the stream, not change the status code.
#[utoipa::path(
    get,
    path = "/v1/submissions/archive",
    tag = "submissions",
    responses(
        (status = 200, description = "ZIP archive of all submission documents", content_type = "application/zip"),
        (status = 404, description = "No submissions to archive"),
        (status = 401, description = "Missing or invalid API key")
    )
)]
pub async fn archive_handler(
    State(use_case): State<Arc<BulkArchiveUseCase>>,
    Extension(ctx): Extension<AdminContext>,
) -> Result<Response, ApiError> {
    let stream = use_case.execute(&ctx).await?;
    let body = Body::from_stream(stream);

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/zip")
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename={}", ARCHIVE_FILE_NAME),
        )
        .body(body)
        .map_err(|e| ApiError::internal_error(format!("Failed to build response: {}", e)))
}
