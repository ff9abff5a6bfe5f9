use anchor_lang::prelude::*;

use crate::error::MigrationError;
use crate::state::LedgerState;

pub fn pause(ctx: Context<Pause>) -> Result<()> {
    let st = &mut ctx.accounts.ledger_state;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        st.owner,
        MigrationError::UnauthorizedOwner
    );
    require!(!st.paused, MigrationError::AlreadyPaused);
    st.paused = true;
    emit!(MigrationPaused { owner: st.owner });
    Ok(())
}

#[derive(Accounts)]
pub struct Pause<'info> {
    #[account(mut, seeds = [b"ledger_state"], bump)]
    pub ledger_state: Account<'info, LedgerState>,
    pub owner: Signer<'info>,
}

#[event]
pub struct MigrationPaused {
    pub owner: Pubkey,
}
