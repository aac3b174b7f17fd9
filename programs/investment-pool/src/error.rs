use anchor_lang::prelude::*;

/// Custom error codes for the investment pool program.
#[error_code]
pub enum PoolError {
    #[msg("Unauthorized: admin signature required")]
    UnauthorizedAdmin,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Sale is not active")]
    SaleInactive,

    #[msg("Sale is already active")]
    SaleAlreadyActive,

    #[msg("Contribution below minimum")]
    BelowMinimumContribution,

    #[msg("Contribution would exceed the hard cap")]
    HardCapExceeded,

    #[msg("Hard cap is not adjustable for this pool")]
    CapNotAdjustable,

    #[msg("Investment limit reached for this account")]
    InvestmentLimitReached,

    #[msg("History is full for this account")]
    HistoryFull,

    #[msg("Investment record not found")]
    InvestmentNotFound,

    #[msg("Reward accrual has not started for this investment")]
    RewardNotStarted,

    #[msg("No new reward month has vested")]
    NothingToClaim,

    #[msg("Reward schedule already fully claimed")]
    RewardScheduleFinished,

    #[msg("Claimed months would exceed the schedule maximum")]
    ClaimAboveScheduleMax,

    #[msg("Transfer exceeds unlocked balance")]
    ExceedsUnlockedBalance,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Math overflow")]
    MathOverflow,
}
