use anchor_lang::prelude::*;

/// Reward/lock schedule, fixed at pool initialization.
///
/// The reward clock (`reward_start_delay` + `max_months` ×
/// `reward_interval`) and the lock clock (`lock_duration`) are independent:
/// an investment can be fully harvested yet still locked, or unlocked while
/// still accruing.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Schedule {
    /// Delay after `start_time` before any reward accrues (seconds).
    pub reward_start_delay: i64,
    /// Length of one reward period (seconds).
    pub reward_interval: i64,
    /// Number of reward periods over which the reward vests.
    pub max_months: u16,
    /// Reward per period, in basis points of the invested amount.
    pub reward_bps_per_month: u64,
    /// Period after `start_time` during which the invested amount is
    /// excluded from transferable balance (seconds).
    pub lock_duration: i64,
}

impl Schedule {
    pub const SIZE: usize =
        8 +  // reward_start_delay
        8 +  // reward_interval
        2 +  // max_months
        8 +  // reward_bps_per_month
        8;   // lock_duration
}

/// Single pool configuration PDA, keyed by reward mint.
#[account]
pub struct PoolState {
    /// Admin authority (multisig recommended off-chain).
    pub admin: Pubkey,
    /// Reward-bearing token mint (escrowed in the pool vault).
    pub reward_mint: Pubkey,
    /// Funding asset mint accepted as contribution payment.
    pub funding_mint: Pubkey,
    /// Funding-token account receiving contributions; admin-mutable.
    pub treasury: Pubkey,
    /// Reward/lock schedule, fixed at initialization.
    pub schedule: Schedule,
    /// Minimum contribution per invest call.
    pub min_contribution: u64,
    /// Cap on `total_invested` (0 = uncapped).
    pub hard_cap: u64,
    /// Whether `set_hard_cap` is permitted on this pool.
    pub adjustable_cap: bool,
    /// Sale toggle; invest is rejected while false.
    pub sale_active: bool,
    /// Sum of all invested amounts, ever.
    pub total_invested: u64,
    /// Sum of all rewards paid out, ever.
    pub total_rewards_paid: u64,
}

impl PoolState {
    pub const SIZE: usize =
        32 + // admin
        32 + // reward_mint
        32 + // funding_mint
        32 + // treasury
        Schedule::SIZE +
        8 +  // min_contribution
        8 +  // hard_cap
        1 +  // adjustable_cap
        1 +  // sale_active
        8 +  // total_invested
        8;   // total_rewards_paid
}
