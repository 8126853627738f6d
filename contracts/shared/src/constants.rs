//! Common constants for validation and storage lifetimes.

// ===== Validation Limits =====

/// Maximum proposal description length in bytes
pub const MAX_DESCRIPTION_LEN: u32 = 512;

// ===== Ledger TTL Constants =====
// Admission flags, voter records and proposals must outlive a full ballot
// cycle. At ~5s per ledger, one year is roughly 6,307,200 ledgers.
pub const PERSISTENT_TTL_LEDGERS: u32 = 6_307_200;
