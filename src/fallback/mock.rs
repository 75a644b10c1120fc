use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use super::error::{FallbackError, FallbackResult};
use super::{SemanticFallback, provisional_key};

/// In-process fallback with deterministic answers.
///
/// Returns [`provisional_key`] for every input, counts calls across clones,
/// and can be told to fail or to stall.
#[derive(Debug, Clone, Default)]
pub struct MockSemanticFallback {
    calls: Arc<AtomicUsize>,
    failure: Option<String>,
    delay: Option<Duration>,
}

impl MockSemanticFallback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails with [`FallbackError::Unavailable`].
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Sleeps before answering; used to exercise timeouts.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SemanticFallback for MockSemanticFallback {
    async fn search(&self, text: &str) -> FallbackResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.failure {
            Some(reason) => Err(FallbackError::Unavailable(reason.clone())),
            None => Ok(provisional_key(text)),
        }
    }
}
