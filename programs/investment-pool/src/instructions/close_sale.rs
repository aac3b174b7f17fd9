use anchor_lang::prelude::*;

use crate::error::PoolError;
use crate::state::PoolState;

pub fn close_sale(ctx: Context<CloseSale>) -> Result<()> {
    let st = &mut ctx.accounts.pool_state;
    require_keys_eq!(ctx.accounts.admin.key(), st.admin, PoolError::UnauthorizedAdmin);
    require!(st.sale_active, PoolError::SaleInactive);
    st.sale_active = false;
    emit!(SaleClosed { admin: st.admin });
    Ok(())
}

#[derive(Accounts)]
pub struct CloseSale<'info> {
    #[account(
        mut,
        seeds = [b"pool_state", pool_state.reward_mint.as_ref()],
        bump
    )]
    pub pool_state: Account<'info, PoolState>,
    pub admin: Signer<'info>,
}

#[event]
pub struct SaleClosed {
    pub admin: Pubkey,
}
