//! Deterministic resolution with an optional semantic fallback on MISS.

pub mod error;


use std::sync::Arc;
use std::time::Duration;

use futures_util::stream::{self, StreamExt};
use serde::Serialize;
use tracing::{debug, instrument, warn};

pub use error::{PipelineError, PipelineResult};

use crate::constants::{DEFAULT_FALLBACK_CONCURRENCY, DEFAULT_FALLBACK_TIMEOUT_MS};
use crate::fallback::{FallbackError, SemanticFallback};
use crate::resolver::{ResolutionRequest, ResolutionResult, ResolutionStats, Resolver};

/// What the fallback said about a MISS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum FallbackOutcome {
    /// Provisional master key, unvalidated.
    Provisional(String),
    /// The fallback errored or timed out; the MISS stands.
    Failed(String),
}

/// A deterministic result plus the fallback outcome, if one was consulted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineOutcome {
    pub result: ResolutionResult,
    /// `None` for hits and when no fallback is configured.
    pub fallback: Option<FallbackOutcome>,
}

impl PipelineOutcome {
    /// The resolved key, else the provisional one.
    pub fn effective_master_key(&self) -> Option<&str> {
        self.result.master_key.as_deref().or(match &self.fallback {
            Some(FallbackOutcome::Provisional(key)) => Some(key.as_str()),
            _ => None,
        })
    }
}

/// [`Resolver`] front end that consults a [`SemanticFallback`] for misses.
///
/// The fallback is called at most once per MISS, under `timeout`, and never
/// retried. Batches keep up to `concurrency` fallback calls in flight.
pub struct ResolutionPipeline<F> {
    resolver: Resolver,
    fallback: Option<Arc<F>>,
    timeout: Duration,
    concurrency: usize,
}

impl<F> Clone for ResolutionPipeline<F> {
    fn clone(&self) -> Self {
        Self {
            resolver: self.resolver.clone(),
            fallback: self.fallback.clone(),
            timeout: self.timeout,
            concurrency: self.concurrency,
        }
    }
}

impl<F> std::fmt::Debug for ResolutionPipeline<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolutionPipeline")
            .field("resolver", &self.resolver)
            .field("fallback", &self.fallback.is_some())
            .field("timeout", &self.timeout)
            .field("concurrency", &self.concurrency)
            .finish()
    }
}

impl<F: SemanticFallback> ResolutionPipeline<F> {
    /// Pipeline without a fallback: misses are returned as-is.
    pub fn new(resolver: Resolver) -> Self {
        Self {
            resolver,
            fallback: None,
            timeout: Duration::from_millis(DEFAULT_FALLBACK_TIMEOUT_MS),
            concurrency: DEFAULT_FALLBACK_CONCURRENCY,
        }
    }

    pub fn with_fallback(mut self, fallback: F) -> Self {
        self.fallback = Some(Arc::new(fallback));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Zero is treated as one.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    pub fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    #[instrument(skip_all, fields(fallback = self.fallback.is_some()))]
    pub async fn resolve(&self, request: &ResolutionRequest) -> PipelineOutcome {
        let result = self.resolver.resolve(request);
        let fallback = self.consult_fallback(&result).await;
        PipelineOutcome { result, fallback }
    }

    /// Resolves the batch in parallel on the blocking pool, then consults the
    /// fallback for the misses with bounded concurrency. Outcomes keep input
    /// order.
    #[instrument(skip_all, fields(requests = requests.len(), concurrency = self.concurrency))]
    pub async fn resolve_batch(
        &self,
        requests: Vec<ResolutionRequest>,
    ) -> PipelineResult<(Vec<PipelineOutcome>, ResolutionStats)> {
        let resolver = self.resolver.clone();
        let results =
            tokio::task::spawn_blocking(move || resolver.resolve_batch(&requests)).await?;
        let stats = ResolutionStats::from_results(&results);

        let pending: Vec<_> = results
            .iter()
            .map(|result| self.consult_fallback(result))
            .collect();
        let fallbacks: Vec<Option<FallbackOutcome>> = stream::iter(pending)
            .buffered(self.concurrency)
            .collect()
            .await;

        let outcomes = results
            .into_iter()
            .zip(fallbacks)
            .map(|(result, fallback)| PipelineOutcome { result, fallback })
            .collect();
        Ok((outcomes, stats))
    }

    async fn consult_fallback(&self, result: &ResolutionResult) -> Option<FallbackOutcome> {
        if result.is_hit() {
            return None;
        }
        let fallback = self.fallback.as_ref()?;

        let searched = tokio::time::timeout(self.timeout, fallback.search(&result.raw_input))
            .await
            .unwrap_or_else(|_| {
                Err(FallbackError::Timeout {
                    timeout_ms: self.timeout.as_millis() as u64,
                })
            });

        match searched {
            Ok(master_key) => {
                debug!(
                    raw_fingerprint = %result.raw_fingerprint.short_hex(),
                    %master_key,
                    "fallback assigned provisional key"
                );
                Some(FallbackOutcome::Provisional(master_key))
            }
            Err(e) => {
                warn!(
                    raw_fingerprint = %result.raw_fingerprint.short_hex(),
                    error = %e,
                    "semantic fallback failed, keeping MISS"
                );
                Some(FallbackOutcome::Failed(e.to_string()))
            }
        }
    }
}
