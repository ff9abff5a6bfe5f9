use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::MIGRATION_ENTRY_DURATION;
use crate::error::MigrationError;
use crate::state::{BalanceBook, EntryBook, LedgerState, LegacySchedule};
use crate::utils::scan;

/// Self-service migration: one successful call fully discharges a wallet's
/// migration obligation. Anyone may trigger it for any seeded wallet; funds
/// only ever move to the wallet's own associated token account.
pub fn migrate_vesting_schedule(
    ctx: Context<MigrateVestingSchedule>,
    wallet: Pubkey,
) -> Result<()> {
    let st = &ctx.accounts.ledger_state;
    require!(!st.paused, MigrationError::MaintenanceActive);

    let balances = &mut ctx.accounts.balance_book;
    require!(
        balances.is_pending(&wallet),
        MigrationError::NoPendingMigration
    );
    // Zero escrow after seeding means the wallet had fully vested on the
    // legacy side; there is nothing to transplant.
    require!(balances.escrowed_of(&wallet) > 0, MigrationError::ZeroBalance);

    // Spend the one-shot gate before reading legacy state or moving funds; a
    // second logically concurrent call must already observe it cleared.
    balances.clear_pending(&wallet);

    let now = Clock::get()?.unix_timestamp;

    // Absent snapshot PDA = empty legacy history; the migration is then a
    // valid no-op beyond clearing the flag.
    let split = match &ctx.accounts.legacy_schedule {
        Some(schedule) => {
            require_keys_eq!(schedule.wallet, wallet, MigrationError::InvalidPubkey);
            scan::split_matured(
                &schedule.entries,
                schedule.next_unvested_index as usize,
                now,
            )?
        }
        None => scan::MaturitySplit {
            total_vested: 0,
            first_future_index: 0,
        },
    };

    if split.total_vested != 0 {
        let recipient_ata = ctx
            .accounts
            .recipient_ata
            .as_ref()
            .ok_or(MigrationError::InvalidRecipientAta)?;

        require_keys_eq!(
            ctx.accounts.mint.key(),
            st.mint,
            MigrationError::InvalidTokenMint
        );
        require_keys_eq!(ctx.accounts.vault.mint, st.mint, MigrationError::InvalidTokenMint);
        let expected_ata = expected_ata_address(&wallet, &st.mint);
        require_keys_eq!(
            recipient_ata.key(),
            expected_ata,
            MigrationError::InvalidRecipientAta
        );
        // Strict ATA checks (pre-created ATA policy).
        require_keys_eq!(
            recipient_ata.mint,
            st.mint,
            MigrationError::InvalidTokenMint
        );
        require_keys_eq!(
            recipient_ata.owner,
            wallet,
            MigrationError::InvalidTokenAccount
        );
        require!(
            ctx.accounts.vault.amount >= split.total_vested,
            MigrationError::InsufficientVaultBalance
        );

        let signer_seeds: &[&[&[u8]]] = &[&[b"ledger_state", &[ctx.bumps.ledger_state]]];
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.vault.to_account_info(),
                    to: recipient_ata.to_account_info(),
                    authority: ctx.accounts.ledger_state.to_account_info(),
                },
                signer_seeds,
            ),
            split.total_vested,
        )?;

        balances.record_released(&wallet, split.total_vested)?;
    }

    // Transplant every not-yet-matured entry; the schedule is sorted, so
    // everything from the split point on lies in the future.
    if let Some(schedule) = &ctx.accounts.legacy_schedule {
        let entries = &mut ctx.accounts.entry_book;
        for legacy in schedule.entries.iter().skip(split.first_future_index) {
            entries.append(
                wallet,
                legacy.maturity_ts,
                MIGRATION_ENTRY_DURATION,
                legacy.quantity,
            )?;
        }
    }

    emit!(VestingScheduleMigrated { wallet, ts: now });

    Ok(())
}

/// ATA derivation: PDA(owner, token_program_id, mint) under the associated
/// token program.
fn expected_ata_address(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    let seeds: &[&[u8]] = &[
        owner.as_ref(),
        anchor_spl::token::ID.as_ref(),
        mint.as_ref(),
    ];
    let (ata, _) = Pubkey::find_program_address(seeds, &anchor_spl::associated_token::ID);
    ata
}

#[derive(Accounts)]
#[instruction(wallet: Pubkey)]
pub struct MigrateVestingSchedule<'info> {
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
        seeds = [b"legacy_schedule", wallet.as_ref()],
        bump
    )]
    pub legacy_schedule: Option<Account<'info, LegacySchedule>>,

    #[account(
        mut,
        seeds = [b"vault", ledger_state.key().as_ref()],
        bump,
        constraint = vault.mint == ledger_state.mint @ MigrationError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub recipient_ata: Option<Account<'info, TokenAccount>>,

    pub mint: Account<'info, Mint>,

    /// Any fee payer; the flow is permissionless.
    pub caller: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct VestingScheduleMigrated {
    pub wallet: Pubkey,
    pub ts: i64,
}
