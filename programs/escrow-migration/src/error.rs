use anchor_lang::prelude::*;

/// Custom error codes for the escrow migration program.
#[error_code]
pub enum MigrationError {
    #[msg("Unauthorized: owner signature required")]
    UnauthorizedOwner,

    #[msg("Unauthorized: bridge signature required")]
    UnauthorizedBridge,

    #[msg("No migration pending for this account")]
    NoPendingMigration,

    #[msg("Account has nothing escrowed to migrate")]
    ZeroBalance,

    #[msg("Account already has a pending migration")]
    AlreadyPending,

    #[msg("Inbound migration still pending for this account")]
    MigrationPending,

    #[msg("Parallel input arrays differ in length")]
    LengthMismatch,

    #[msg("Insufficient escrowed balance")]
    InsufficientBalance,

    #[msg("Setup window is closed")]
    SetupClosed,

    #[msg("System is under maintenance")]
    MaintenanceActive,

    #[msg("Ledger is not paused")]
    NotPaused,

    #[msg("Ledger is already paused")]
    AlreadyPaused,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Empty batch")]
    EmptyBatch,

    #[msg("Batch size too large")]
    BatchTooLarge,

    #[msg("Book capacity exceeded")]
    BookFull,

    #[msg("Legacy entries must be in ascending maturity order")]
    UnsortedLegacySchedule,

    #[msg("Next-unvested index exceeds entry count")]
    InvalidIndex,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Invalid amount (must be > 0)")]
    InvalidAmount,

    #[msg("Invalid timestamp")]
    InvalidTimestamp,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Invalid associated token account for recipient")]
    InvalidRecipientAta,

    #[msg("Invalid settlement handoff account")]
    InvalidSettlementAccount,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,
}
