use anchor_lang::prelude::*;

use crate::error::PoolError;
use crate::state::PoolState;

pub fn open_sale(ctx: Context<OpenSale>) -> Result<()> {
    let st = &mut ctx.accounts.pool_state;
    require_keys_eq!(ctx.accounts.admin.key(), st.admin, PoolError::UnauthorizedAdmin);
    require!(!st.sale_active, PoolError::SaleAlreadyActive);
    st.sale_active = true;
    emit!(SaleOpened { admin: st.admin });
    Ok(())
}

#[derive(Accounts)]
pub struct OpenSale<'info> {
    #[account(
        mut,
        seeds = [b"pool_state", pool_state.reward_mint.as_ref()],
        bump
    )]
    pub pool_state: Account<'info, PoolState>,
    pub admin: Signer<'info>,
}

#[event]
pub struct SaleOpened {
    pub admin: Pubkey,
}
