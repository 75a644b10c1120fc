//! Ordered candidate expansion for free-text exam descriptions.
//!
//! The same expansion runs over catalog names at build time and over incoming
//! text at resolution time.

mod generator;
pub mod terms;

#[cfg(test)]
mod tests;

pub use generator::generate_candidates;
