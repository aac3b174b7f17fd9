//! Program-wide constants.

/// Denominator for basis-point math (per-month reward percentage and
/// schedule-progress reporting).
pub const BASIS_POINT: u64 = 10_000;

/// Max investment records stored in one investor state PDA.
pub const MAX_INVESTMENTS_PER_ACCOUNT: usize = 32;

/// Max history entries stored in one investor state PDA.
pub const MAX_HISTORY_ENTRIES: usize = 256;
