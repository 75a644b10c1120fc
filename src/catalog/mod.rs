//! Typed catalog entries and the validation boundary in front of the cache builder.

mod entry;
pub mod error;
mod loader;


pub use entry::{CatalogEntry, CatalogRecord, split_synonyms, validate_records};
pub use error::{CatalogError, CatalogResult};
pub use loader::load_catalog;
