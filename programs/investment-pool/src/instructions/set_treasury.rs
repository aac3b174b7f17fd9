use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::error::PoolError;
use crate::state::PoolState;

pub fn set_treasury(ctx: Context<SetTreasury>) -> Result<()> {
    let new_treasury = ctx.accounts.new_treasury.key();
    require!(new_treasury != Pubkey::default(), PoolError::InvalidPubkey);

    let pool_state_key = ctx.accounts.pool_state.key();
    let st = &mut ctx.accounts.pool_state;
    require_keys_eq!(ctx.accounts.admin.key(), st.admin, PoolError::UnauthorizedAdmin);
    require_keys_eq!(
        ctx.accounts.new_treasury.mint,
        st.funding_mint,
        PoolError::InvalidTokenMint
    );

    // The pool's own vault PDA must never be the contribution treasury.
    let (vault_pda, _) =
        Pubkey::find_program_address(&[b"vault", pool_state_key.as_ref()], &crate::ID);
    require!(new_treasury != vault_pda, PoolError::InvalidTokenAccount);

    let old = st.treasury;
    st.treasury = new_treasury;

    emit!(TreasurySet {
        admin: st.admin,
        old_treasury: old,
        new_treasury,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetTreasury<'info> {
    #[account(
        mut,
        seeds = [b"pool_state", pool_state.reward_mint.as_ref()],
        bump
    )]
    pub pool_state: Account<'info, PoolState>,

    pub new_treasury: Account<'info, TokenAccount>,

    pub admin: Signer<'info>,
}

#[event]
pub struct TreasurySet {
    pub admin: Pubkey,
    pub old_treasury: Pubkey,
    pub new_treasury: Pubkey,
}
