use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// The blocking batch resolution task panicked or was cancelled.
    #[error("batch resolution task failed: {0}")]
    BatchTask(#[from] tokio::task::JoinError),
}

pub type PipelineResult<T> = Result<T, PipelineError>;
