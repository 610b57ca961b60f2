use std::time::Instant;

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::app::AppState;
use crate::app::errors::ApiError;
use crate::context::{CurrentIdentity, MaybeIdentity};

/// Reject the request unless it carries a bearer token for a live identity.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = authorization_header(req.headers());
    let identity = state.authenticator.require(header.as_deref()).await?;

    req.extensions_mut().insert(CurrentIdentity::new(identity));
    Ok(next.run(req).await)
}

/// Attach the identity if one resolves; otherwise continue anonymously.
pub async fn optional_auth(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let header = authorization_header(req.headers());
    let identity = state.authenticator.optional(header.as_deref()).await;

    req.extensions_mut().insert(MaybeIdentity::new(identity));
    next.run(req).await
}

/// One line per request: method, path, status, latency.
pub async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(req).await;

    tracing::info!(
        %method,
        %path,
        status = response.status().as_u16(),
        latency_ms = started.elapsed().as_millis() as u64,
        "request handled"
    );
    response
}

/// Non-UTF-8 header values count as "no credential".
fn authorization_header(headers: &HeaderMap) -> Option<String> {
    headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
