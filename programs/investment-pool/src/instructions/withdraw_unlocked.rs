use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::PoolError;
use crate::state::{InvestorState, PoolState};
use crate::utils::schedule;

/// Outbound transfer path for escrowed balance. Every withdrawal passes
/// through the lock gate: only the portion of the balance whose records have
/// aged past `lock_duration` may leave the vault.
pub fn withdraw_unlocked(ctx: Context<WithdrawUnlocked>, amount: u64) -> Result<()> {
    require!(amount > 0, PoolError::InvalidAmount);

    let pool_state_ai = ctx.accounts.pool_state.to_account_info();
    let pool_state_bump = ctx.bumps.pool_state;

    let st = &ctx.accounts.pool_state;
    require_keys_eq!(
        ctx.accounts.reward_destination.mint,
        st.reward_mint,
        PoolError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.reward_destination.owner,
        ctx.accounts.investor.key(),
        PoolError::InvalidTokenAccount
    );

    let now = Clock::get()?.unix_timestamp;
    let inv = &mut ctx.accounts.investor_state;

    let locked = schedule::locked_balance(&inv.investments, st.schedule.lock_duration, now)?;
    let available = inv.balance.saturating_sub(locked);
    require!(amount <= available, PoolError::ExceedsUnlockedBalance);
    require!(
        ctx.accounts.vault.amount >= amount,
        PoolError::InsufficientVaultBalance
    );

    inv.balance = inv
        .balance
        .checked_sub(amount)
        .ok_or(PoolError::MathOverflow)?;

    let reward_mint = st.reward_mint;
    let signer_seeds: &[&[&[u8]]] = &[&[
        b"pool_state",
        reward_mint.as_ref(),
        &[pool_state_bump],
    ]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.reward_destination.to_account_info(),
                authority: pool_state_ai,
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(UnlockedWithdrawn {
        investor: ctx.accounts.investor.key(),
        amount,
        remaining_balance: ctx.accounts.investor_state.balance,
        locked_balance: locked,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct WithdrawUnlocked<'info> {
    #[account(
        seeds = [b"pool_state", pool_state.reward_mint.as_ref()],
        bump
    )]
    pub pool_state: Account<'info, PoolState>,

    #[account(
        mut,
        seeds = [b"investor", pool_state.key().as_ref(), investor.key().as_ref()],
        bump
    )]
    pub investor_state: Box<Account<'info, InvestorState>>,

    #[account(
        mut,
        seeds = [b"vault", pool_state.key().as_ref()],
        bump,
        constraint = vault.mint == pool_state.reward_mint @ PoolError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub reward_destination: Account<'info, TokenAccount>,

    pub investor: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct UnlockedWithdrawn {
    pub investor: Pubkey,
    pub amount: u64,
    pub remaining_balance: u64,
    pub locked_balance: u64,
}
