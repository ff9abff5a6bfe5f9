//! One-time migration of a legacy escrow ledger into a new vesting entry
//! store, with an outbound burn path toward a settlement domain.
//!
//! The operator seeds per-account balances (arming a one-shot pending flag),
//! then anyone may transplant a seeded wallet's legacy schedule: matured
//! entries pay out immediately, future ones become entries in the new store.
//! The designated bridge burns remaining entries of migrated wallets and the
//! value is handed to the settlement account.

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("7ZV4Diig9Z6w5B8BgVtdz3ATLB7h9AuEnYtTxKQJpxre");

#[program]
pub mod escrow_migration {
    use super::*;

    pub fn initialize(
        ctx: Context<Initialize>,
        bridge: Pubkey,
        settlement_account: Pubkey,
    ) -> Result<()> {
        instructions::initialize::initialize(ctx, bridge, settlement_account)
    }

    pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
        instructions::deposit_tokens::deposit_tokens(ctx, amount)
    }

    pub fn set_bridge(ctx: Context<SetBridge>, new_bridge: Pubkey) -> Result<()> {
        instructions::set_bridge::set_bridge(ctx, new_bridge)
    }

    pub fn register_legacy_schedule(
        ctx: Context<RegisterLegacySchedule>,
        wallet: Pubkey,
        entries: Vec<state::LegacyEntry>,
        next_unvested_index: u32,
    ) -> Result<()> {
        instructions::register_legacy_schedule::register_legacy_schedule(
            ctx,
            wallet,
            entries,
            next_unvested_index,
        )
    }

    pub fn seed_account_balances(
        ctx: Context<SeedAccountBalances>,
        wallets: Vec<Pubkey>,
        escrowed_amounts: Vec<u64>,
        vested_amounts: Vec<u64>,
    ) -> Result<()> {
        instructions::seed_account_balances::seed_account_balances(
            ctx,
            wallets,
            escrowed_amounts,
            vested_amounts,
        )
    }

    pub fn import_vesting_entries(
        ctx: Context<ImportVestingEntries>,
        wallets: Vec<Pubkey>,
        end_timestamps: Vec<i64>,
        amounts: Vec<u64>,
    ) -> Result<()> {
        instructions::import_vesting_entries::import_vesting_entries(
            ctx,
            wallets,
            end_timestamps,
            amounts,
        )
    }

    pub fn migrate_vesting_schedule(
        ctx: Context<MigrateVestingSchedule>,
        wallet: Pubkey,
    ) -> Result<()> {
        instructions::migrate_vesting_schedule::migrate_vesting_schedule(ctx, wallet)
    }

    pub fn burn_for_migration(
        ctx: Context<BurnForMigration>,
        wallet: Pubkey,
        entry_ids: Vec<u64>,
    ) -> Result<BurnedEntries> {
        instructions::burn_for_migration::burn_for_migration(ctx, wallet, entry_ids)
    }

    pub fn pause(ctx: Context<Pause>) -> Result<()> {
        instructions::pause::pause(ctx)
    }

    pub fn unpause(ctx: Context<Unpause>) -> Result<()> {
        instructions::unpause::unpause(ctx)
    }

    pub fn close_setup(ctx: Context<CloseSetup>) -> Result<()> {
        instructions::close_setup::close_setup(ctx)
    }

    pub fn emit_escrow_quote(ctx: Context<EmitEscrowQuote>, wallet: Pubkey) -> Result<()> {
        instructions::emit_escrow_quote::emit_escrow_quote(ctx, wallet)
    }
}
