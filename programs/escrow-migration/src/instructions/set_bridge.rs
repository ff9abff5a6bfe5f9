use anchor_lang::prelude::*;

use crate::error::MigrationError;
use crate::state::LedgerState;

pub fn set_bridge(ctx: Context<SetBridge>, new_bridge: Pubkey) -> Result<()> {
    require!(new_bridge != Pubkey::default(), MigrationError::InvalidPubkey);

    let ledger_key = ctx.accounts.ledger_state.key();
    let st = &mut ctx.accounts.ledger_state;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        st.owner,
        MigrationError::UnauthorizedOwner
    );
    require!(st.setup_open, MigrationError::SetupClosed);

    require!(new_bridge != st.owner, MigrationError::InvalidPubkey);
    require!(new_bridge != ledger_key, MigrationError::InvalidPubkey);
    require!(new_bridge != crate::ID, MigrationError::InvalidPubkey);

    // The bridge must be able to sign; block the known program PDAs.
    let (vault_pda, _) =
        Pubkey::find_program_address(&[b"vault", ledger_key.as_ref()], &crate::ID);
    require!(new_bridge != vault_pda, MigrationError::InvalidPubkey);

    let old = st.bridge;
    st.bridge = new_bridge;

    emit!(BridgeSet {
        owner: st.owner,
        old_bridge: old,
        new_bridge,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetBridge<'info> {
    #[account(mut, seeds = [b"ledger_state"], bump)]
    pub ledger_state: Account<'info, LedgerState>,

    pub owner: Signer<'info>,
}

#[event]
pub struct BridgeSet {
    pub owner: Pubkey,
    pub old_bridge: Pubkey,
    pub new_bridge: Pubkey,
}
