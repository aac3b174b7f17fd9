use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::error::PoolError;
use crate::state::{PoolState, Schedule};

pub fn initialize_pool(
    ctx: Context<InitializePool>,
    schedule: Schedule,
    min_contribution: u64,
    hard_cap: u64,
    adjustable_cap: bool,
) -> Result<()> {
    require!(schedule.reward_interval > 0, PoolError::InvalidConfig);
    require!(schedule.reward_start_delay >= 0, PoolError::InvalidConfig);
    require!(schedule.lock_duration > 0, PoolError::InvalidConfig);
    require!(schedule.max_months > 0, PoolError::InvalidConfig);
    require!(schedule.reward_bps_per_month > 0, PoolError::InvalidConfig);
    require!(
        ctx.accounts.reward_mint.key() != ctx.accounts.funding_mint.key(),
        PoolError::InvalidConfig
    );
    require!(
        ctx.accounts.treasury.key() != Pubkey::default(),
        PoolError::InvalidPubkey
    );
    require_keys_eq!(
        ctx.accounts.treasury.mint,
        ctx.accounts.funding_mint.key(),
        PoolError::InvalidTokenMint
    );
    // The treasury must be an external account, not the pool's own vault.
    require!(
        ctx.accounts.treasury.key() != ctx.accounts.vault.key(),
        PoolError::InvalidTokenAccount
    );

    let st = &mut ctx.accounts.pool_state;
    st.admin = ctx.accounts.admin.key();
    st.reward_mint = ctx.accounts.reward_mint.key();
    st.funding_mint = ctx.accounts.funding_mint.key();
    st.treasury = ctx.accounts.treasury.key();
    st.schedule = schedule;
    st.min_contribution = min_contribution;
    st.hard_cap = hard_cap;
    st.adjustable_cap = adjustable_cap;
    st.sale_active = false;
    st.total_invested = 0;
    st.total_rewards_paid = 0;

    emit!(PoolInitialized {
        admin: st.admin,
        reward_mint: st.reward_mint,
        funding_mint: st.funding_mint,
        treasury: st.treasury,
        max_months: schedule.max_months,
        reward_bps_per_month: schedule.reward_bps_per_month,
        lock_duration: schedule.lock_duration,
        hard_cap,
        adjustable_cap,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializePool<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + PoolState::SIZE,
        seeds = [b"pool_state", reward_mint.key().as_ref()],
        bump
    )]
    pub pool_state: Account<'info, PoolState>,

    #[account(
        init,
        payer = admin,
        token::mint = reward_mint,
        token::authority = pool_state,
        seeds = [b"vault", pool_state.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub reward_mint: Account<'info, Mint>,

    pub funding_mint: Account<'info, Mint>,

    /// Funding-token account receiving contributions.
    pub treasury: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct PoolInitialized {
    pub admin: Pubkey,
    pub reward_mint: Pubkey,
    pub funding_mint: Pubkey,
    pub treasury: Pubkey,
    pub max_months: u16,
    pub reward_bps_per_month: u64,
    pub lock_duration: i64,
    pub hard_cap: u64,
    pub adjustable_cap: bool,
}
