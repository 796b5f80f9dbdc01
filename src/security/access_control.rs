//! Access control middleware.
//! Gates mutating endpoints behind a pre-shared API key.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};

use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Header carrying the shared secret. Header names compare
/// case-insensitively, so any casing from the client matches.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Middleware for mutating routes. Admits the request only when the
/// supplied credential exactly matches the configured secret.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let provided = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    check_credential(state.auth.api_key.as_deref(), provided)?;

    Ok(next.run(request).await)
}

/// The guard's decision function.
///
/// A server with no configured secret refuses the operation outright
/// rather than silently allowing unauthenticated writes.
pub fn check_credential(
    expected: Option<&str>,
    provided: Option<&str>,
) -> Result<(), ApiError> {
    let Some(expected) = expected else {
        return Err(ApiError::ServerMisconfigured);
    };

    match provided {
        Some(key) if key == expected => Ok(()),
        _ => Err(ApiError::Unauthorized),
    }
}
