use anchor_lang::prelude::*;

/// Global configuration PDA; also the vault authority.
#[account]
pub struct LedgerState {
    /// Custody token mint.
    pub mint: Pubkey,
    /// Owner authority (migration operator; multisig recommended off-chain).
    pub owner: Pubkey,
    /// Designated settlement-bridge caller; the only signer allowed to burn
    /// entries toward the settlement domain.
    pub bridge: Pubkey,
    /// Token account on the settlement side that receives burned value.
    pub settlement_account: Pubkey,
    /// Setup window flag. While open the owner may seed balances, import
    /// entries and register legacy snapshots; closing it is one-way.
    pub setup_open: bool,
    /// Maintenance flag; blocks self-service migration while set.
    pub paused: bool,
}

impl LedgerState {
    pub const SIZE: usize =
        32 + // mint
        32 + // owner
        32 + // bridge
        32 + // settlement_account
        1 +  // setup_open
        1;   // paused
}
