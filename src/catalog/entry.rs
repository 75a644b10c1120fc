use serde::{Deserialize, Serialize};

use super::error::CatalogError;
use crate::constants::{SYNONYM_DELIMITER, SYNONYM_NULL_MARKER};

/// A catalog row as delivered by an external loader, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRecord {
    #[serde(default)]
    pub master_key: Option<String>,
    #[serde(default)]
    pub canonical_name: Option<String>,
    /// Comma-delimited synonym list.
    #[serde(default)]
    pub synonyms: Option<String>,
    #[serde(default)]
    pub property: Option<String>,
    #[serde(default)]
    pub system: Option<String>,
}

/// A validated catalog entry. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub master_key: String,
    pub canonical_name: String,
    pub synonyms: Vec<String>,
    pub property: String,
    pub system: String,
}

impl CatalogEntry {
    pub fn new(
        master_key: impl Into<String>,
        canonical_name: impl Into<String>,
        synonyms: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            master_key: master_key.into(),
            canonical_name: canonical_name.into(),
            synonyms: synonyms.into_iter().map(Into::into).collect(),
            property: String::new(),
            system: String::new(),
        }
    }

    pub fn with_property(mut self, property: impl Into<String>) -> Self {
        self.property = property.into();
        self
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = system.into();
        self
    }

    /// Validates `record`, which sits at position `row` of the catalog.
    ///
    /// `master_key` and `canonical_name` must be present and not blank;
    /// `property` and `system` must be present but may be empty. An absent
    /// synonym list means no synonyms. Every missing field is reported at once.
    pub fn try_from_record(row: usize, record: CatalogRecord) -> Result<Self, CatalogError> {
        let mut missing = Vec::new();

        let master_key = non_blank(record.master_key);
        if master_key.is_none() {
            missing.push("master_key");
        }
        let canonical_name = non_blank(record.canonical_name);
        if canonical_name.is_none() {
            missing.push("canonical_name");
        }
        if record.property.is_none() {
            missing.push("property");
        }
        if record.system.is_none() {
            missing.push("system");
        }

        match (master_key, canonical_name, record.property, record.system) {
            (Some(master_key), Some(canonical_name), Some(property), Some(system)) => Ok(Self {
                master_key,
                canonical_name,
                synonyms: record
                    .synonyms
                    .as_deref()
                    .map(split_synonyms)
                    .unwrap_or_default(),
                property,
                system,
            }),
            _ => Err(CatalogError::MissingFields {
                row,
                fields: missing,
            }),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Splits a delimited synonym cell, dropping blanks and null markers.
pub fn split_synonyms(cell: &str) -> Vec<String> {
    cell.split(SYNONYM_DELIMITER)
        .map(str::trim)
        .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case(SYNONYM_NULL_MARKER))
        .map(str::to_string)
        .collect()
}

/// Validates every record, failing on the first invalid row.
pub fn validate_records(
    records: impl IntoIterator<Item = CatalogRecord>,
) -> Result<Vec<CatalogEntry>, CatalogError> {
    records
        .into_iter()
        .enumerate()
        .map(|(row, record)| CatalogEntry::try_from_record(row, record))
        .collect()
}
