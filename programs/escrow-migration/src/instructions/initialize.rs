use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::error::MigrationError;
use crate::state::{BalanceBook, EntryBook, LedgerState};

pub fn initialize(
    ctx: Context<Initialize>,
    bridge: Pubkey,
    settlement_account: Pubkey,
) -> Result<()> {
    require!(bridge != Pubkey::default(), MigrationError::InvalidPubkey);
    require!(
        settlement_account != Pubkey::default(),
        MigrationError::InvalidPubkey
    );
    require!(bridge != crate::ID, MigrationError::InvalidPubkey);

    // The bridge must be able to sign; block the known program PDAs.
    let ledger_key = ctx.accounts.ledger_state.key();
    require!(bridge != ledger_key, MigrationError::InvalidPubkey);
    let (vault_pda, _) =
        Pubkey::find_program_address(&[b"vault", ledger_key.as_ref()], &crate::ID);
    require!(bridge != vault_pda, MigrationError::InvalidPubkey);

    let st = &mut ctx.accounts.ledger_state;
    st.mint = ctx.accounts.mint.key();
    st.owner = ctx.accounts.owner.key();
    st.bridge = bridge;
    st.settlement_account = settlement_account;
    st.setup_open = true;
    st.paused = false;

    let balances = &mut ctx.accounts.balance_book;
    balances.total_escrowed_balance = 0;
    balances.records = Vec::new();

    let entries = &mut ctx.accounts.entry_book;
    entries.next_entry_id = 1;
    entries.entries = Vec::new();

    emit!(LedgerInitialized {
        mint: st.mint,
        owner: st.owner,
        bridge: st.bridge,
        settlement_account: st.settlement_account,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + LedgerState::SIZE,
        seeds = [b"ledger_state"],
        bump
    )]
    pub ledger_state: Account<'info, LedgerState>,

    #[account(
        init,
        payer = owner,
        space = BalanceBook::space(),
        seeds = [b"balance_book", ledger_state.key().as_ref()],
        bump
    )]
    pub balance_book: Box<Account<'info, BalanceBook>>,

    #[account(
        init,
        payer = owner,
        space = EntryBook::space(),
        seeds = [b"entry_book", ledger_state.key().as_ref()],
        bump
    )]
    pub entry_book: Box<Account<'info, EntryBook>>,

    #[account(
        init,
        payer = owner,
        token::mint = mint,
        token::authority = ledger_state,
        seeds = [b"vault", ledger_state.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct LedgerInitialized {
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub bridge: Pubkey,
    pub settlement_account: Pubkey,
}
