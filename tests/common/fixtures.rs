//! Test fixtures for integration tests.

use std::io::Write;

use labmatch::catalog::{CatalogEntry, CatalogRecord};
use tempfile::NamedTempFile;

/// `(master_key, canonical_name, synonyms)` in catalog order.
pub const SAMPLE_CATALOG: &[(&str, &str, &[&str])] = &[
    ("MK-HB", "Hemoglobina", &["Hb", "Hemoglobina sérica"]),
    (
        "MK-HBA1C",
        "Hemoglobina Glicada (HbA1c)",
        &["A1c", "Glicohemoglobina"],
    ),
    ("MK-GLI", "Glicose", &["Glicemia"]),
    ("MK-GLIJ", "Glicose de Jejum", &["Glicemia de jejum"]),
    ("MK-UREIA", "Ureia", &["Uréia sérica"]),
    ("MK-CREAT", "Creatinina", &["Creatinina sérica"]),
    ("MK-TSH", "TSH", &["Hormônio Tireoestimulante"]),
    ("MK-T4L", "T4 Livre", &["Tiroxina livre"]),
    ("MK-HDL", "Colesterol HDL", &["HDL"]),
    ("MK-COLT", "Colesterol Total", &[]),
    ("MK-PCR", "Proteína C Reativa", &["PCR"]),
    ("MK-FERR", "Ferritina", &["Ferritina sérica"]),
];

pub fn sample_catalog() -> Vec<CatalogEntry> {
    SAMPLE_CATALOG
        .iter()
        .map(|(key, name, synonyms)| {
            CatalogEntry::new(*key, *name, synonyms.iter().copied())
                .with_property("MCnc")
                .with_system("Ser/Plas")
        })
        .collect()
}

pub fn sample_records() -> Vec<CatalogRecord> {
    SAMPLE_CATALOG
        .iter()
        .map(|(key, name, synonyms)| CatalogRecord {
            master_key: Some(key.to_string()),
            canonical_name: Some(name.to_string()),
            synonyms: (!synonyms.is_empty()).then(|| synonyms.join(", ")),
            property: Some("MCnc".to_string()),
            system: Some("Ser/Plas".to_string()),
        })
        .collect()
}

/// Writes `records` as a JSON catalog file.
pub fn write_catalog(records: &[CatalogRecord]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    let json = serde_json::to_string_pretty(records).expect("serialize records");
    file.write_all(json.as_bytes()).expect("write catalog");
    file.flush().expect("flush catalog");
    file
}
