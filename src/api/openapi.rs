use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers::health::{HealthResponse, ReadinessResponse};
use crate::application::dto::{
    BatchSummary, GeneratedDocumentDto, SkippedSubmission, SubmissionDto,
};
use crate::domain::value_objects::Checklist;

/// OpenAPI specification for the submission document service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Submission Docs API",
        version = "1.0.0",
        description = "Generates submission PDFs and streams bulk archives"
    ),
    paths(
        crate::api::handlers::health::health_handler,
        crate::api::handlers::health::readiness_handler,
        crate::api::handlers::submissions::list_handler,
        crate::api::handlers::archive::archive_handler,
        crate::api::handlers::documents::generate_document_handler,
        crate::api::handlers::documents::download_document_handler,
    ),
    components(
        schemas(
            SubmissionDto,
            Checklist,
            GeneratedDocumentDto,
            BatchSummary,
            SkippedSubmission,
            HealthResponse,
            ReadinessResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "submissions", description = "Submission listing and bulk archive"),
        (name = "documents", description = "Single-document generation and download")
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI route
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
