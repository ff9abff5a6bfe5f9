use anchor_lang::prelude::*;

use crate::constants::{MAX_BATCH, MIGRATION_ENTRY_DURATION};
use crate::error::MigrationError;
use crate::state::{BalanceBook, EntryBook, LedgerState};

/// Operator bulk import: seeds entries with explicit maturities for wallets
/// whose balances were already seeded. Does not clear pending flags and does
/// not touch balance aggregates; it complements balance seeding, it does not
/// replace the self-service migration.
pub fn import_vesting_entries(
    ctx: Context<ImportVestingEntries>,
    wallets: Vec<Pubkey>,
    end_timestamps: Vec<i64>,
    amounts: Vec<u64>,
) -> Result<()> {
    let st = &ctx.accounts.ledger_state;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        st.owner,
        MigrationError::UnauthorizedOwner
    );
    require!(st.setup_open, MigrationError::SetupClosed);
    require!(!wallets.is_empty(), MigrationError::EmptyBatch);
    require!(wallets.len() <= MAX_BATCH, MigrationError::BatchTooLarge);
    require!(
        wallets.len() == end_timestamps.len() && wallets.len() == amounts.len(),
        MigrationError::LengthMismatch
    );

    let balances = &ctx.accounts.balance_book;
    let entries = &mut ctx.accounts.entry_book;
    for i in 0..wallets.len() {
        require!(
            balances.is_pending(&wallets[i]),
            MigrationError::NoPendingMigration
        );
        require!(end_timestamps[i] > 0, MigrationError::InvalidTimestamp);
        require!(amounts[i] > 0, MigrationError::InvalidAmount);

        entries.append(
            wallets[i],
            end_timestamps[i],
            MIGRATION_ENTRY_DURATION,
            amounts[i],
        )?;

        emit!(VestingEntryImported {
            wallet: wallets[i],
            maturity_ts: end_timestamps[i],
            amount: amounts[i],
        });
    }

    Ok(())
}

#[derive(Accounts)]
pub struct ImportVestingEntries<'info> {
    #[account(seeds = [b"ledger_state"], bump)]
    pub ledger_state: Account<'info, LedgerState>,

    #[account(
        seeds = [b"balance_book", ledger_state.key().as_ref()],
        bump
    )]
    pub balance_book: Box<Account<'info, BalanceBook>>,

    #[account(
        mut,
        seeds = [b"entry_book", ledger_state.key().as_ref()],
        bump
    )]
    pub entry_book: Box<Account<'info, EntryBook>>,

    pub owner: Signer<'info>,
}

#[event]
pub struct VestingEntryImported {
    pub wallet: Pubkey,
    pub maturity_ts: i64,
    pub amount: u64,
}
