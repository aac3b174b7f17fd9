use anchor_lang::prelude::*;

use crate::state::{InvestorState, PoolState};
use crate::utils::schedule;

/// Read-only account rollup: sums over all records split into locked and
/// unlocked buckets as of now. Per-entry history is read directly from the
/// investor state account off-chain.
pub fn emit_investor_summary(ctx: Context<EmitInvestorSummary>, owner: Pubkey) -> Result<()> {
    let st = &ctx.accounts.pool_state;
    let now = Clock::get()?.unix_timestamp;

    let inv = &ctx.accounts.investor_state;
    let rollup = schedule::summarize(&st.schedule, &inv.investments, now)?;

    emit!(InvestorSummary {
        owner,
        investment_count: inv.investments.len() as u32,
        history_count: inv.history.len() as u32,
        balance: inv.balance,
        total_amount: rollup.total_amount,
        total_claimed_value: rollup.total_claimed_value,
        locked_amount: rollup.locked_amount,
        unlocked_amount: rollup.unlocked_amount,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(owner: Pubkey)]
pub struct EmitInvestorSummary<'info> {
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
pub struct InvestorSummary {
    pub owner: Pubkey,
    pub investment_count: u32,
    pub history_count: u32,
    pub balance: u64,
    pub total_amount: u64,
    pub total_claimed_value: u64,
    pub locked_amount: u64,
    pub unlocked_amount: u64,
}
