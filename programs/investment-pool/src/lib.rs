//! Time-locked investment pool with monthly reward accrual.
//!
//! Contributions in a funding asset buy a reward-bearing token position that
//! is escrowed in a pool vault. Each position accrues a fixed basis-point
//! reward per interval after a start delay, up to a schedule maximum, and its
//! principal is untransferable until a separate lock duration elapses. All
//! schedule constants are fixed per pool at initialization, so a 24-month
//! capped sale and a 12-month adjustable-supply pool are two pools of the
//! same program.

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::Schedule;

declare_id!("qqwHVZwNZViwZLvwGg1uKp3Dvh86nqCsW2PbqugCvoG");

#[program]
pub mod investment_pool {
    use super::*;

    /// Create a pool for a reward mint: configuration PDA plus reward vault.
    /// The sale starts inactive.
    pub fn initialize_pool(
        ctx: Context<InitializePool>,
        schedule: Schedule,
        min_contribution: u64,
        hard_cap: u64,
        adjustable_cap: bool,
    ) -> Result<()> {
        instructions::initialize_pool(ctx, schedule, min_contribution, hard_cap, adjustable_cap)
    }

    /// Admin deposits reward tokens into the pool vault.
    pub fn fund_rewards(ctx: Context<FundRewards>, amount: u64) -> Result<()> {
        instructions::fund_rewards(ctx, amount)
    }

    /// Pull the contribution to the treasury and append a new investment
    /// record; the credited amount is escrowed and time-locked.
    pub fn invest(ctx: Context<Invest>, amount: u64) -> Result<()> {
        instructions::invest(ctx, amount)
    }

    /// Pay out the reward for all months newly vested on one record.
    pub fn claim_reward(ctx: Context<ClaimReward>, index: u32) -> Result<()> {
        instructions::claim_reward(ctx, index)
    }

    /// Move unlocked escrowed balance out of the vault to the investor.
    pub fn withdraw_unlocked(ctx: Context<WithdrawUnlocked>, amount: u64) -> Result<()> {
        instructions::withdraw_unlocked(ctx, amount)
    }

    /// Admin opens the sale.
    pub fn open_sale(ctx: Context<OpenSale>) -> Result<()> {
        instructions::open_sale(ctx)
    }

    /// Admin closes the sale; existing positions keep accruing.
    pub fn close_sale(ctx: Context<CloseSale>) -> Result<()> {
        instructions::close_sale(ctx)
    }

    /// Admin swaps the funding-token treasury account.
    pub fn set_treasury(ctx: Context<SetTreasury>) -> Result<()> {
        instructions::set_treasury(ctx)
    }

    /// Admin adjusts the contribution cap, where the pool allows it.
    pub fn set_hard_cap(ctx: Context<SetHardCap>, new_cap: u64) -> Result<()> {
        instructions::set_hard_cap(ctx, new_cap)
    }

    /// Emit the projected view of one investment record.
    pub fn emit_investment_quote(
        ctx: Context<EmitInvestmentQuote>,
        owner: Pubkey,
        index: u32,
    ) -> Result<()> {
        instructions::emit_investment_quote(ctx, owner, index)
    }

    /// Emit the rollup over all of an account's investment records.
    pub fn emit_investor_summary(ctx: Context<EmitInvestorSummary>, owner: Pubkey) -> Result<()> {
        instructions::emit_investor_summary(ctx, owner)
    }
}
