use anchor_lang::prelude::*;

use crate::error::MigrationError;
use crate::state::LedgerState;

pub fn unpause(ctx: Context<Unpause>) -> Result<()> {
    let st = &mut ctx.accounts.ledger_state;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        st.owner,
        MigrationError::UnauthorizedOwner
    );
    require!(st.paused, MigrationError::NotPaused);
    st.paused = false;
    emit!(MigrationUnpaused { owner: st.owner });
    Ok(())
}

#[derive(Accounts)]
pub struct Unpause<'info> {
    #[account(mut, seeds = [b"ledger_state"], bump)]
    pub ledger_state: Account<'info, LedgerState>,
    pub owner: Signer<'info>,
}

#[event]
pub struct MigrationUnpaused {
    pub owner: Pubkey,
}
