//! Resolution engine: candidate generation plus tiered lookup, per request.

mod engine;
mod stats;
mod types;


pub use engine::{Resolver, resolve};
pub use stats::ResolutionStats;
pub use types::{MatchOrigin, ResolutionRequest, ResolutionResult};
