use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
/// Errors raised while turning catalog rows into [`super::CatalogEntry`] values.
pub enum CatalogError {
    /// A row lacks one or more required fields.
    #[error("catalog row {row} is missing required fields: {}", fields.join(", "))]
    MissingFields {
        /// Zero-based position of the row in the catalog.
        row: usize,
        /// Names of every missing field, in declaration order.
        fields: Vec<&'static str>,
    },

    /// The catalog file could not be read.
    #[error("failed to read catalog '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog file is not a JSON array of records.
    #[error("failed to parse catalog '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
