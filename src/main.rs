use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing::{info, warn, Level};

use submission_docs::{
    api::{create_router, middleware::AuthState, router::AppState},
    application::{
        ports::{DocumentStore, SubmissionRepository},
        use_cases::{
            BulkArchiveUseCase, FetchDocumentUseCase, GenerateDocumentUseCase,
            ListSubmissionsUseCase,
        },
    },
    infrastructure::{
        pdf::TemplateOverlay,
        persistence::PostgresSubmissionRepository,
        storage::FilesystemDocumentStore,
    },
    Config,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing with structured logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting SubmissionDocs service");

    // Load configuration
    let config = Config::from_env();
    config.validate()?;
    info!("Configuration loaded and validated");

    // Initialize database connection pool
    info!("Connecting to database");
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_acquire_timeout_secs))
        .connect(&config.database_url)
        .await
        .map_err(|e| {
            tracing::error!("Failed to connect to database: {}", e);
            e
        })?;

    // Run database migrations
    info!("Running database migrations");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to run migrations: {}", e);
            e
        })?;

    // Initialize infrastructure layer
    let submission_repo: Arc<dyn SubmissionRepository> =
        Arc::new(PostgresSubmissionRepository::new(pool.clone()));

    let document_store = Arc::new(FilesystemDocumentStore::new(
        config.generated_docs_root.clone(),
    ));
    document_store.init().await?;
    let document_store: Arc<dyn DocumentStore> = document_store;

    // Template load failure disables only the single-document path
    let overlay = match TemplateOverlay::load(&config.template_path) {
        Ok(overlay) => Some(Arc::new(overlay)),
        Err(e) => {
            warn!(
                error = %e,
                path = ?config.template_path,
                "Master template unavailable; single-document generation disabled"
            );
            None
        }
    };

    info!("Infrastructure layer initialized");

    // Initialize use cases (application layer)
    let list_use_case = Arc::new(ListSubmissionsUseCase::new(Arc::clone(&submission_repo)));
    let bulk_archive_use_case =
        Arc::new(BulkArchiveUseCase::new(Arc::clone(&submission_repo)));
    let generate_use_case = Arc::new(GenerateDocumentUseCase::new(
        Arc::clone(&submission_repo),
        Arc::clone(&document_store),
        overlay,
    ));
    let fetch_use_case = Arc::new(FetchDocumentUseCase::new(
        Arc::clone(&submission_repo),
        Arc::clone(&document_store),
    ));

    info!("Application layer initialized");

    // Create app state
    let state = AppState {
        pool: Arc::new(pool),
        list_use_case,
        bulk_archive_use_case,
        generate_use_case,
        fetch_use_case,
        auth: AuthState::new(config.admin_api_keys.clone()),
    };

    // Create router
    let app = create_router(state);

    // Start server
    info!("Listening on {}", config.listen_addr);
    let listener = TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
