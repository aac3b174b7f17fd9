use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::PoolError;
use crate::state::{Currency, HistoryKind, InvestorState, PoolState};
use crate::utils::schedule;

pub fn claim_reward(ctx: Context<ClaimReward>, index: u32) -> Result<()> {
    // Capture AccountInfos before taking mutable borrows.
    let pool_state_ai = ctx.accounts.pool_state.to_account_info();
    let pool_state_bump = ctx.bumps.pool_state;

    let st = &mut ctx.accounts.pool_state;
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
    let sched = st.schedule;

    let inv = &mut ctx.accounts.investor_state;
    let rec = inv.record(index)?;
    let previously_claimed = rec.claimed_months;
    let (new_claimed_months, reward) = schedule::claimable(&sched, rec, now)?;

    // Ledger state is committed before the outbound transfer; a re-entrant
    // call would observe the updated record and hit NothingToClaim.
    let rec = inv.record_mut(index)?;
    rec.apply_claim(new_claimed_months, sched.max_months)?;
    // Best-effort: a saturated audit trail must not make vested rewards
    // unpayable.
    inv.append_history_best_effort(HistoryKind::Claim, Currency::Reward, reward, now);
    st.total_rewards_paid = st
        .total_rewards_paid
        .checked_add(reward)
        .ok_or(PoolError::MathOverflow)?;

    require!(
        ctx.accounts.vault.amount >= reward,
        PoolError::InsufficientVaultBalance
    );

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
        reward,
    )?;

    emit!(RewardClaimed {
        investor: ctx.accounts.investor.key(),
        id: index,
        newly_vested_months: new_claimed_months - previously_claimed,
        claimed_months: new_claimed_months,
        reward,
        reward_finished: new_claimed_months == sched.max_months,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ClaimReward<'info> {
    #[account(
        mut,
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

    /// Investor's reward-token account the payout lands in.
    #[account(mut)]
    pub reward_destination: Account<'info, TokenAccount>,

    pub investor: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct RewardClaimed {
    pub investor: Pubkey,
    pub id: u32,
    pub newly_vested_months: u16,
    pub claimed_months: u16,
    pub reward: u64,
    pub reward_finished: bool,
}
