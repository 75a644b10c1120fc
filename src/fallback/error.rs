//! Semantic fallback error types.

use thiserror::Error;

/// Errors returned by a [`super::SemanticFallback`] implementation.
///
/// None of these ever changes a deterministic resolution result; the pipeline
/// reports them next to the MISS instead.
#[derive(Debug, Error)]
pub enum FallbackError {
    /// The request never produced an HTTP response.
    #[error("fallback transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("fallback service returned status {status} for {url}")]
    Status { status: u16, url: String },

    /// The response body did not carry a usable master key.
    #[error("invalid fallback response: {0}")]
    InvalidResponse(String),

    /// The call did not finish within the configured budget.
    #[error("fallback timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// The service refused to answer.
    #[error("fallback unavailable: {0}")]
    Unavailable(String),
}

/// Convenience result type for fallback calls.
pub type FallbackResult<T> = Result<T, FallbackError>;
