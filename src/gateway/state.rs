use std::sync::Arc;

use crate::fallback::SemanticFallback;
use crate::pipeline::ResolutionPipeline;

#[derive(Clone)]
pub struct HandlerState<F: SemanticFallback + Clone + 'static> {
    pub pipeline: Arc<ResolutionPipeline<F>>,

    pub max_batch_size: usize,
}

impl<F> HandlerState<F>
where
    F: SemanticFallback + Clone + 'static,
{
    pub fn new(pipeline: ResolutionPipeline<F>) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            max_batch_size: crate::constants::MAX_BATCH_SIZE,
        }
    }

    pub fn with_max_batch_size(mut self, max_batch_size: usize) -> Self {
        self.max_batch_size = max_batch_size;
        self
    }
}
