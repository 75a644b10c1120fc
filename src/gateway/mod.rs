//! HTTP gateway (Axum) for exam resolution.
//!
//! This module is primarily used by the `labmatch` server binary.

pub mod error;
pub mod handler;
pub mod state;


use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub use error::GatewayError;
pub use handler::{resolve_batch_handler, resolve_handler};
pub use state::HandlerState;

use crate::constants::{
    LABMATCH_STATUS_HEADER, LABMATCH_STATUS_HEALTHY, LABMATCH_STATUS_NOT_READY,
    LABMATCH_STATUS_READY,
};
use crate::fallback::SemanticFallback;

pub fn create_router_with_state<F>(state: HandlerState<F>) -> Router
where
    F: SemanticFallback + Clone + 'static,
{
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/ready", get(ready_handler::<F>))
        .route("/v1/resolve", post(resolve_handler::<F>))
        .route("/v1/resolve/batch", post(resolve_batch_handler::<F>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(serde::Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub cache: CacheStatus,
    pub fallback: &'static str,
}

#[derive(serde::Serialize)]
pub struct CacheStatus {
    pub entries: usize,
    pub primary: usize,
    pub synonym: usize,
    pub collisions: usize,
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        LABMATCH_STATUS_HEADER,
        HeaderValue::from_static(LABMATCH_STATUS_HEALTHY),
    );

    (
        StatusCode::OK,
        headers,
        Json(HealthResponse { status: "ok" }),
    )
        .into_response()
}

/// Ready once the primary tier holds at least one key.
#[tracing::instrument(skip(state))]
pub async fn ready_handler<F>(State(state): State<HandlerState<F>>) -> Response
where
    F: SemanticFallback + Clone + 'static,
{
    let summary = state.pipeline.resolver().cache().summary();
    let cache = CacheStatus {
        entries: summary.entries,
        primary: summary.primary_len,
        synonym: summary.synonym_len,
        collisions: summary.collisions.len(),
    };

    let is_ready = cache.primary > 0;
    let (status_code, status) = if is_ready {
        (StatusCode::OK, LABMATCH_STATUS_READY)
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, LABMATCH_STATUS_NOT_READY)
    };
    let fallback = if state.pipeline.has_fallback() {
        "enabled"
    } else {
        "disabled"
    };

    let mut headers = HeaderMap::new();
    headers.insert(LABMATCH_STATUS_HEADER, HeaderValue::from_static(status));

    (
        status_code,
        headers,
        Json(ReadyResponse {
            status,
            cache,
            fallback,
        }),
    )
        .into_response()
}
