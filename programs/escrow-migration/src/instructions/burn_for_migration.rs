use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::MAX_BATCH;
use crate::error::MigrationError;
use crate::state::{BalanceBook, EntryBook, LedgerState, VestingEntry};

/// Aggregate burned by one call, with the captured entries in the same order
/// as the requested ids (placeholders for zero-remaining or unknown ids).
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct BurnedEntries {
    pub amount: u64,
    pub entries: Vec<VestingEntry>,
}

/// Outbound settlement burn, restricted to the designated bridge: removes a
/// wallet's remaining entries, debits the ledger and hands the value to the
/// settlement account. Refused while the wallet's inbound migration is still
/// pending so the two directions cannot race.
pub fn burn_for_migration(
    ctx: Context<BurnForMigration>,
    wallet: Pubkey,
    entry_ids: Vec<u64>,
) -> Result<BurnedEntries> {
    let st = &ctx.accounts.ledger_state;
    require_keys_eq!(
        ctx.accounts.bridge.key(),
        st.bridge,
        MigrationError::UnauthorizedBridge
    );
    require!(!entry_ids.is_empty(), MigrationError::EmptyBatch);
    require!(entry_ids.len() <= MAX_BATCH, MigrationError::BatchTooLarge);
    require_keys_eq!(
        ctx.accounts.settlement_account.key(),
        st.settlement_account,
        MigrationError::InvalidSettlementAccount
    );

    let balances = &mut ctx.accounts.balance_book;
    require!(!balances.is_pending(&wallet), MigrationError::MigrationPending);

    let entries = &mut ctx.accounts.entry_book;
    let (burned, captured) = entries.burn_entries(&wallet, &entry_ids)?;

    if burned != 0 {
        balances.reduce_account_balance(&wallet, burned)?;
        require!(
            ctx.accounts.vault.amount >= burned,
            MigrationError::InsufficientVaultBalance
        );

        let signer_seeds: &[&[&[u8]]] = &[&[b"ledger_state", &[ctx.bumps.ledger_state]]];
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.vault.to_account_info(),
                    to: ctx.accounts.settlement_account.to_account_info(),
                    authority: ctx.accounts.ledger_state.to_account_info(),
                },
                signer_seeds,
            ),
            burned,
        )?;
    }

    let now = Clock::get()?.unix_timestamp;
    emit!(BurnedForHandoff {
        wallet,
        entry_ids,
        amount: burned,
        ts: now,
    });

    Ok(BurnedEntries {
        amount: burned,
        entries: captured,
    })
}

#[derive(Accounts)]
pub struct BurnForMigration<'info> {
    #[account(seeds = [b"ledger_state"], bump)]
    pub ledger_state: Account<'info, LedgerState>,

    #[account(
        mut,
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

    #[account(
        mut,
        seeds = [b"vault", ledger_state.key().as_ref()],
        bump,
        constraint = vault.mint == ledger_state.mint @ MigrationError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = settlement_account.mint == ledger_state.mint @ MigrationError::InvalidTokenMint,
    )]
    pub settlement_account: Account<'info, TokenAccount>,

    pub bridge: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct BurnedForHandoff {
    pub wallet: Pubkey,
    pub entry_ids: Vec<u64>,
    pub amount: u64,
    pub ts: i64,
}
