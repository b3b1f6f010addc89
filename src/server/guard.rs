use super::handlers::error_response;
use crate::{Error, Result, config::CorsConfig};
use axum::{
    extract::{Request, State},
    http::{HeaderValue, Method, header::ORIGIN, request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

/// Decides whether a request with the given `Origin` header may proceed.
///
/// Requests without an origin (curl, server-to-server) always pass. Browser
/// requests must match `configured` exactly.
pub fn is_allowed(origin: Option<&str>, configured: &str) -> bool {
    match origin {
        None => true,
        Some(origin) if origin.is_empty() => true,
        Some(origin) => origin == configured,
    }
}

/// Rejects requests from foreign origins before any route runs.
pub async fn origin_guard(
    State(cors): State<Arc<CorsConfig>>,
    request: Request,
    next: Next,
) -> Response {
    let rejected = match request.headers().get(ORIGIN) {
        None => None,
        Some(value) => match value.to_str() {
            Ok(origin) if is_allowed(Some(origin), &cors.allowed_origin) => None,
            Ok(origin) => Some(origin.to_string()),
            Err(_) => Some(String::from_utf8_lossy(value.as_bytes()).into_owned()),
        },
    };

    if let Some(origin) = rejected {
        warn!("Blocked request to {} from origin: {}", request.uri().path(), origin);
        return error_response(&Error::cors_rejected(origin)).into_response();
    }

    next.run(request).await
}

/// CORS headers for the one allowed front-end.
pub fn build_cors_layer(cors: &CorsConfig) -> Result<CorsLayer> {
    let origin = HeaderValue::from_str(&cors.allowed_origin).map_err(|e| {
        Error::config(format!(
            "Invalid allowed origin '{}': {}",
            cors.allowed_origin, e
        ))
    })?;

    // Only echo the header back to the matching origin; requests without
    // an Origin get none.
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |request_origin: &HeaderValue, _: &request::Parts| *request_origin == origin,
        ))
        .allow_methods([Method::GET, Method::OPTIONS]))
}
