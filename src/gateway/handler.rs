use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::constants::{LABMATCH_STATUS_BATCH, LABMATCH_STATUS_HEADER, REQUEST_ID_HEADER};
use crate::fallback::SemanticFallback;
use crate::gateway::error::GatewayError;
use crate::gateway::state::HandlerState;
use crate::pipeline::{FallbackOutcome, PipelineOutcome};
use crate::resolver::{ResolutionRequest, ResolutionResult, ResolutionStats};

#[derive(Debug, Deserialize)]
pub struct BatchRequest {
    pub requests: Vec<ResolutionRequest>,
}

#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    #[serde(flatten)]
    pub result: ResolutionResult,
    pub decision: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<FallbackOutcome>,
}

impl From<PipelineOutcome> for ResolveResponse {
    fn from(outcome: PipelineOutcome) -> Self {
        Self {
            decision: outcome.result.decision(),
            result: outcome.result,
            fallback: outcome.fallback,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub results: Vec<ResolveResponse>,
    pub stats: ResolutionStats,
}

#[instrument(skip_all, fields(request_id = tracing::field::Empty))]
pub async fn resolve_handler<F>(
    State(state): State<HandlerState<F>>,
    Json(body): Json<serde_json::Value>,
) -> Result<Response, GatewayError>
where
    F: SemanticFallback + Clone + 'static,
{
    let request_id = Uuid::new_v4();
    tracing::Span::current().record("request_id", tracing::field::display(&request_id));

    let request: ResolutionRequest = serde_json::from_value(body)
        .map_err(|e| GatewayError::InvalidRequest(format!("Invalid request schema: {}", e)))?;

    let outcome = state.pipeline.resolve(&request).await;
    let tier = outcome.result.tier;
    debug!(%tier, decision = %outcome.result.decision(), "resolved");

    Ok(make_response(
        request_id,
        tier.as_header_value(),
        ResolveResponse::from(outcome),
    ))
}

#[instrument(skip_all, fields(request_id = tracing::field::Empty))]
pub async fn resolve_batch_handler<F>(
    State(state): State<HandlerState<F>>,
    Json(body): Json<serde_json::Value>,
) -> Result<Response, GatewayError>
where
    F: SemanticFallback + Clone + 'static,
{
    let request_id = Uuid::new_v4();
    tracing::Span::current().record("request_id", tracing::field::display(&request_id));

    let batch: BatchRequest = serde_json::from_value(body)
        .map_err(|e| GatewayError::InvalidRequest(format!("Invalid request schema: {}", e)))?;

    if batch.requests.len() > state.max_batch_size {
        return Err(GatewayError::BatchTooLarge {
            size: batch.requests.len(),
            max: state.max_batch_size,
        });
    }

    let (outcomes, stats) = state
        .pipeline
        .resolve_batch(batch.requests)
        .await
        .map_err(|e| GatewayError::Internal(format!("Batch resolution failed: {}", e)))?;
    info!(
        total = stats.total,
        primary_hits = stats.primary_hits,
        synonym_hits = stats.synonym_hits,
        misses = stats.misses,
        "batch resolved"
    );

    let response = BatchResponse {
        results: outcomes.into_iter().map(ResolveResponse::from).collect(),
        stats,
    };
    Ok(make_response(request_id, LABMATCH_STATUS_BATCH, response))
}

fn make_response<T: Serialize>(request_id: Uuid, status: &'static str, body: T) -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(LABMATCH_STATUS_HEADER, HeaderValue::from_static(status));
    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        headers.insert(REQUEST_ID_HEADER, value);
    }

    (StatusCode::OK, headers, Json(body)).into_response()
}
