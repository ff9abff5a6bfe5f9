use anchor_lang::prelude::*;

use crate::error::MigrationError;
use crate::state::LedgerState;

/// Ends the setup window. One-way: operator seeding, entry imports,
/// legacy-schedule registration and bridge rotation are disabled for good.
pub fn close_setup(ctx: Context<CloseSetup>) -> Result<()> {
    let st = &mut ctx.accounts.ledger_state;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        st.owner,
        MigrationError::UnauthorizedOwner
    );
    require!(st.setup_open, MigrationError::SetupClosed);
    st.setup_open = false;
    emit!(SetupWindowClosed { owner: st.owner });
    Ok(())
}

#[derive(Accounts)]
pub struct CloseSetup<'info> {
    #[account(mut, seeds = [b"ledger_state"], bump)]
    pub ledger_state: Account<'info, LedgerState>,
    pub owner: Signer<'info>,
}

#[event]
pub struct SetupWindowClosed {
    pub owner: Pubkey,
}
