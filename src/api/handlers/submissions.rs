use axum::{extract::State, response::Json, Extension};
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::application::dto::{AdminContext, SubmissionDto};
use crate::application::use_cases::ListSubmissionsUseCase;

/// GET /v1/submissions
/// List all submissions, most recent first
#[utoipa::path(
    get,
    path = "/v1/submissions",
    tag = "submissions",
    responses(
        (status = 200, description = "All submissions", body = [SubmissionDto]),
        (status = 401, description = "Missing or invalid API key")
    )
)]
pub async fn list_handler(
    State(use_case): State<Arc<ListSubmissionsUseCase>>,
    Extension(ctx): Extension<AdminContext>,
) -> Result<Json<Vec<SubmissionDto>>, ApiError> {
    let submissions = use_case.execute(&ctx).await?;
    Ok(Json(submissions))
}
