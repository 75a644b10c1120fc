use std::path::Path;

use tracing::{info, instrument};

use super::entry::{CatalogEntry, CatalogRecord, validate_records};
use super::error::{CatalogError, CatalogResult};

/// Reads a JSON array of [`CatalogRecord`]s from `path` and validates them.
///
/// Row order in the file is preserved; it decides precedence when two entries
/// produce the same fingerprint. Any invalid row fails the whole load.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_catalog(path: impl AsRef<Path>) -> CatalogResult<Vec<CatalogEntry>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let records: Vec<CatalogRecord> =
        serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let entries = validate_records(records)?;

    info!(entries = entries.len(), "catalog loaded");
    Ok(entries)
}
