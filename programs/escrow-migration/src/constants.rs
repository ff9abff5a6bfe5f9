//! Program-wide constants.

/// Canonical duration stamped on every migrated or imported vesting entry:
/// 52 weeks, in seconds. The legacy ledger carried no duration field, so a
/// single fixed duration is applied to all transplanted entries.
pub const MIGRATION_ENTRY_DURATION: i64 = 52 * 7 * 86_400;

/// Max accounts tracked in the balance book PDA.
pub const MAX_ACCOUNTS: usize = 64;

/// Max outstanding vesting entries in the entry book PDA, shared across all
/// wallets (PDA init space tops out near 10 KiB, so the book cannot hold the
/// theoretical worst case of every wallet at `MAX_LEGACY_ENTRIES`). The
/// operator must keep the aggregate of imported plus not-yet-matured legacy
/// entries across the seeded population under this cap, or a wallet's
/// transplant hits `BookFull` and its migration cannot complete.
pub const MAX_ENTRIES: usize = 120;

/// Max entries per wallet in a legacy schedule snapshot.
pub const MAX_LEGACY_ENTRIES: usize = 64;

/// Max rows processed per batch call (operator seeding, imports, burns).
/// Keeps the burn flow's captured-entry return data under the 1024-byte
/// return-data limit.
pub const MAX_BATCH: usize = 12;
