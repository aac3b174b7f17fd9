use anchor_lang::prelude::*;

use crate::error::PoolError;
use crate::state::PoolState;

pub fn set_hard_cap(ctx: Context<SetHardCap>, new_cap: u64) -> Result<()> {
    let st = &mut ctx.accounts.pool_state;
    require_keys_eq!(ctx.accounts.admin.key(), st.admin, PoolError::UnauthorizedAdmin);
    require!(st.adjustable_cap, PoolError::CapNotAdjustable);
    // Never cap below what has already been taken in.
    require!(
        new_cap == 0 || new_cap >= st.total_invested,
        PoolError::InvalidConfig
    );

    let old = st.hard_cap;
    st.hard_cap = new_cap;

    emit!(HardCapSet {
        admin: st.admin,
        old_cap: old,
        new_cap,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetHardCap<'info> {
    #[account(
        mut,
        seeds = [b"pool_state", pool_state.reward_mint.as_ref()],
        bump
    )]
    pub pool_state: Account<'info, PoolState>,

    pub admin: Signer<'info>,
}

#[event]
pub struct HardCapSet {
    pub admin: Pubkey,
    pub old_cap: u64,
    pub new_cap: u64,
}
