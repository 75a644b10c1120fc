//! Cross-cutting, shared constants.

/// Hex characters of a fingerprint shown in logs and provisional keys.
pub const SHORT_FINGERPRINT_LEN: usize = 8;

/// Separator between synonyms in a catalog row.
pub const SYNONYM_DELIMITER: char = ',';

/// Placeholder some catalog exports write for an empty synonyms cell.
pub const SYNONYM_NULL_MARKER: &str = "nan";

/// Prefix of master keys handed out by the semantic fallback for unknown exams.
pub const PROVISIONAL_KEY_PREFIX: &str = "MK-NOVA-";

/// Default budget for one semantic fallback call.
pub const DEFAULT_FALLBACK_TIMEOUT_MS: u64 = 2_000;

/// Fallback calls a batch keeps in flight at once.
pub const DEFAULT_FALLBACK_CONCURRENCY: usize = 32;

/// Response header carrying the resolution tier.
pub const LABMATCH_STATUS_HEADER: &str = "x-labmatch-status";
pub const LABMATCH_STATUS_HEALTHY: &str = "healthy";
pub const LABMATCH_STATUS_READY: &str = "ready";
pub const LABMATCH_STATUS_NOT_READY: &str = "not_ready";
pub const LABMATCH_STATUS_BATCH: &str = "BATCH";

/// Response header echoing the id assigned to each HTTP request.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Upper bound on requests accepted by one batch call.
pub const MAX_BATCH_SIZE: usize = 10_000;
