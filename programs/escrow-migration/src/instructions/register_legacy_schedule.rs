use anchor_lang::prelude::*;

use crate::constants::MAX_LEGACY_ENTRIES;
use crate::error::MigrationError;
use crate::state::{LedgerState, LegacyEntry, LegacySchedule};

pub fn register_legacy_schedule(
    ctx: Context<RegisterLegacySchedule>,
    wallet: Pubkey,
    entries: Vec<LegacyEntry>,
    next_unvested_index: u32,
) -> Result<()> {
    let st = &ctx.accounts.ledger_state;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        st.owner,
        MigrationError::UnauthorizedOwner
    );
    require!(st.setup_open, MigrationError::SetupClosed);
    require!(wallet != Pubkey::default(), MigrationError::InvalidPubkey);
    require!(entries.len() <= MAX_LEGACY_ENTRIES, MigrationError::BookFull);
    require!(
        (next_unvested_index as usize) <= entries.len(),
        MigrationError::InvalidIndex
    );

    // The maturity scan relies on ascending order to stop at the first
    // future entry.
    for pair in entries.windows(2) {
        require!(
            pair[0].maturity_ts <= pair[1].maturity_ts,
            MigrationError::UnsortedLegacySchedule
        );
    }
    for entry in &entries {
        require!(entry.maturity_ts > 0, MigrationError::InvalidTimestamp);
        require!(entry.quantity > 0, MigrationError::InvalidAmount);
    }

    let schedule = &mut ctx.accounts.legacy_schedule;
    schedule.wallet = wallet;
    schedule.next_unvested_index = next_unvested_index;
    schedule.entries = entries;

    emit!(LegacyScheduleRegistered {
        wallet,
        entry_count: schedule.entry_count(),
        next_unvested_index,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(wallet: Pubkey)]
pub struct RegisterLegacySchedule<'info> {
    #[account(seeds = [b"ledger_state"], bump)]
    pub ledger_state: Account<'info, LedgerState>,

    #[account(
        init,
        payer = owner,
        space = LegacySchedule::space(),
        seeds = [b"legacy_schedule", wallet.as_ref()],
        bump
    )]
    pub legacy_schedule: Account<'info, LegacySchedule>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct LegacyScheduleRegistered {
    pub wallet: Pubkey,
    pub entry_count: u32,
    pub next_unvested_index: u32,
}
