use anchor_lang::prelude::*;

use crate::state::{BalanceBook, EntryBook, LedgerState};

/// Read-only accessor for indexers: emits one wallet's aggregates alongside
/// the global escrowed total. A wallet without a record quotes zeros.
pub fn emit_escrow_quote(ctx: Context<EmitEscrowQuote>, wallet: Pubkey) -> Result<()> {
    let balances = &ctx.accounts.balance_book;
    let entries = &ctx.accounts.entry_book;

    emit!(EscrowQuote {
        wallet,
        total_escrowed: balances.escrowed_of(&wallet),
        total_vested: balances.vested_of(&wallet),
        migration_pending: balances.is_pending(&wallet),
        entry_count: entries.count_of(&wallet),
        total_escrowed_balance: balances.total_escrowed_balance,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitEscrowQuote<'info> {
    #[account(seeds = [b"ledger_state"], bump)]
    pub ledger_state: Account<'info, LedgerState>,

    #[account(
        seeds = [b"balance_book", ledger_state.key().as_ref()],
        bump
    )]
    pub balance_book: Box<Account<'info, BalanceBook>>,

    #[account(
        seeds = [b"entry_book", ledger_state.key().as_ref()],
        bump
    )]
    pub entry_book: Box<Account<'info, EntryBook>>,
}

#[event]
pub struct EscrowQuote {
    pub wallet: Pubkey,
    pub total_escrowed: u64,
    pub total_vested: u64,
    pub migration_pending: bool,
    pub entry_count: u32,
    pub total_escrowed_balance: u64,
}
