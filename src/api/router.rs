use axum::{
    http::header,
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::sensitive_headers::SetSensitiveRequestHeadersLayer;

use crate::api::handlers::{
    archive_handler, download_document_handler, generate_document_handler, health_handler,
    list_handler, readiness_handler,
};
use crate::api::middleware::{auth_middleware, AuthState};
use crate::api::openapi;
use crate::application::use_cases::{
    BulkArchiveUseCase, FetchDocumentUseCase, GenerateDocumentUseCase, ListSubmissionsUseCase,
};

/// Application state container
pub struct AppState {
    pub pool: Arc<PgPool>,
    pub list_use_case: Arc<ListSubmissionsUseCase>,
    pub bulk_archive_use_case: Arc<BulkArchiveUseCase>,
    pub generate_use_case: Arc<GenerateDocumentUseCase>,
    pub fetch_use_case: Arc<FetchDocumentUseCase>,
    pub auth: AuthState,
}

/// Create router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let list_state = Arc::clone(&state.list_use_case);
    let bulk_state = Arc::clone(&state.bulk_archive_use_case);
    let generate_state = Arc::clone(&state.generate_use_case);
    let fetch_state = Arc::clone(&state.fetch_use_case);

    Router::new()
        // Health checks (no auth required)
        .route("/health", get(health_handler))
        .route(
            "/health/ready",
            get(readiness_handler).with_state(Arc::clone(&state.pool)),
        )
        // Protected admin routes
        .route(
            "/v1/submissions",
            get(list_handler).with_state(list_state),
        )
        .route(
            "/v1/submissions/archive",
            get(archive_handler).with_state(bulk_state),
        )
        .route(
            "/v1/submissions/{id}/document",
            post(generate_document_handler).with_state(generate_state),
        )
        .route(
            "/v1/submissions/{id}/document",
            get(download_document_handler).with_state(fetch_state),
        )
        .merge(openapi::swagger_ui())
        // Middleware layers
        .layer(axum_middleware::from_fn_with_state(
            state.auth.clone(),
            auth_middleware,
        ))
        .layer(
            ServiceBuilder::new()
                .layer(SetSensitiveRequestHeadersLayer::new(std::iter::once(
                    header::AUTHORIZATION,
                )))
                .layer(CorsLayer::permissive()),
        )
}
