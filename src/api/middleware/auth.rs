use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use sha2::{Digest, Sha256};

use crate::application::dto::AdminContext;

/// Configured admin API keys, shared with the auth middleware
#[derive(Clone)]
pub struct AuthState {
    pub api_keys: Arc<Vec<String>>,
}

impl AuthState {
    pub fn new(api_keys: Vec<String>) -> Self {
        Self {
            api_keys: Arc::new(api_keys),
        }
    }
}

/// Authentication middleware for the admin API.
///
/// Validates `Authorization: ApiKey <key>` against the configured keys and
/// injects a request-scoped [`AdminContext`]; downstream use cases accept
/// the context and never consult auth state themselves.
pub async fn auth_middleware(
    State(state): State<AuthState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let path = request.uri().path();

    // Health probes and API docs are public
    if path == "/health"
        || path.starts_with("/health/")
        || path.starts_with("/swagger-ui")
        || path.starts_with("/api-docs")
    {
        return Ok(next.run(request).await);
    }

    // Check if auth is disabled (for development)
    if std::env::var("DISABLE_AUTH").unwrap_or_default() == "true" {
        request.extensions_mut().insert(AdminContext {
            subject: "anonymous".to_string(),
        });
        return Ok(next.run(request).await);
    }

    let auth_header = headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok());

    let ctx = authenticate(&state.api_keys, auth_header).ok_or(StatusCode::UNAUTHORIZED)?;
    request.extensions_mut().insert(ctx);

    Ok(next.run(request).await)
}

/// Validate the Authorization header against the configured keys
fn authenticate(api_keys: &[String], header: Option<&str>) -> Option<AdminContext> {
    let api_key = header?.strip_prefix("ApiKey ")?;

    if api_keys.is_empty() || !api_keys.iter().any(|key| key == api_key) {
        return None;
    }

    // Stable, non-secret caller identifier for logs
    let subject = hex::encode(&Sha256::digest(api_key.as_bytes())[..4]);
    Some(AdminContext { subject })
}
