use anchor_lang::prelude::*;

use crate::state::{InvestorState, PoolState};
use crate::utils::schedule;

/// Read-only per-record view: projected values plus the currently pending
/// reward, surfaced as an event for off-chain consumers.
pub fn emit_investment_quote(
    ctx: Context<EmitInvestmentQuote>,
    owner: Pubkey,
    index: u32,
) -> Result<()> {
    let st = &ctx.accounts.pool_state;
    let now = Clock::get()?.unix_timestamp;

    let inv = &ctx.accounts.investor_state;
    let rec = inv.record(index)?;

    let projection = schedule::project(&st.schedule, rec)?;
    let pending = schedule::pending_reward(&st.schedule, rec, now);

    emit!(InvestmentQuote {
        owner,
        id: rec.id,
        amount: rec.amount,
        start_time: rec.start_time,
        claimed_months: rec.claimed_months,
        reward_finished: rec.reward_finished,
        claimed_value: projection.claimed_value,
        total_reward: projection.total_reward,
        unclaimed_value: projection.unclaimed_value,
        end_time: projection.end_time,
        progress_bps: projection.progress_bps,
        pending_reward: pending,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(owner: Pubkey)]
pub struct EmitInvestmentQuote<'info> {
    #[account(
        seeds = [b"pool_state", pool_state.reward_mint.as_ref()],
        bump
    )]
    pub pool_state: Account<'info, PoolState>,

    #[account(
        seeds = [b"investor", pool_state.key().as_ref(), owner.as_ref()],
        bump
    )]
    pub investor_state: Box<Account<'info, InvestorState>>,
}

#[event]
pub struct InvestmentQuote {
    pub owner: Pubkey,
    pub id: u32,
    pub amount: u64,
    pub start_time: i64,
    pub claimed_months: u16,
    pub reward_finished: bool,
    pub claimed_value: u64,
    pub total_reward: u64,
    pub unclaimed_value: u64,
    pub end_time: i64,
    pub progress_bps: u64,
    pub pending_reward: u64,
}
