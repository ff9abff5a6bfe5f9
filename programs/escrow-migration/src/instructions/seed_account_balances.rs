use anchor_lang::prelude::*;

use crate::constants::MAX_BATCH;
use crate::error::MigrationError;
use crate::state::{BalanceBook, LedgerState};

/// Operator balance seeding: credits escrowed/vested aggregates per wallet
/// and arms each wallet's pending flag. Entries are seeded separately
/// (imports or self-service transplantation).
pub fn seed_account_balances(
    ctx: Context<SeedAccountBalances>,
    wallets: Vec<Pubkey>,
    escrowed_amounts: Vec<u64>,
    vested_amounts: Vec<u64>,
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
        wallets.len() == escrowed_amounts.len() && wallets.len() == vested_amounts.len(),
        MigrationError::LengthMismatch
    );

    let now = Clock::get()?.unix_timestamp;
    let balances = &mut ctx.accounts.balance_book;
    for i in 0..wallets.len() {
        require!(wallets[i] != Pubkey::default(), MigrationError::InvalidPubkey);
        balances.seed_account(wallets[i], escrowed_amounts[i], vested_amounts[i])?;

        emit!(AccountEscrowMigrated {
            wallet: wallets[i],
            escrowed: escrowed_amounts[i],
            vested: vested_amounts[i],
            ts: now,
        });
    }

    Ok(())
}

#[derive(Accounts)]
pub struct SeedAccountBalances<'info> {
    #[account(seeds = [b"ledger_state"], bump)]
    pub ledger_state: Account<'info, LedgerState>,

    #[account(
        mut,
        seeds = [b"balance_book", ledger_state.key().as_ref()],
        bump
    )]
    pub balance_book: Box<Account<'info, BalanceBook>>,

    pub owner: Signer<'info>,
}

#[event]
pub struct AccountEscrowMigrated {
    pub wallet: Pubkey,
    pub escrowed: u64,
    pub vested: u64,
    pub ts: i64,
}
