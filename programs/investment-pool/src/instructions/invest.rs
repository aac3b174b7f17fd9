use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::PoolError;
use crate::state::{Currency, HistoryKind, InvestorState, PoolState};

pub fn invest(ctx: Context<Invest>, amount: u64) -> Result<()> {
    let st = &ctx.accounts.pool_state;
    require!(st.sale_active, PoolError::SaleInactive);
    require!(amount >= st.min_contribution, PoolError::BelowMinimumContribution);

    let new_total = st
        .total_invested
        .checked_add(amount)
        .ok_or(PoolError::MathOverflow)?;
    if st.hard_cap > 0 {
        require!(new_total <= st.hard_cap, PoolError::HardCapExceeded);
    }

    require_keys_eq!(
        ctx.accounts.funding_source.mint,
        st.funding_mint,
        PoolError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.funding_source.owner,
        ctx.accounts.investor.key(),
        PoolError::InvalidTokenAccount
    );

    // Pull the contribution to the treasury before any ledger mutation.
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.funding_source.to_account_info(),
                to: ctx.accounts.treasury.to_account_info(),
                authority: ctx.accounts.investor.to_account_info(),
            },
        ),
        amount,
    )?;

    let now = Clock::get()?.unix_timestamp;

    let inv = &mut ctx.accounts.investor_state;
    if inv.owner == Pubkey::default() {
        inv.owner = ctx.accounts.investor.key();
    }
    let id = inv.append_investment(amount, now)?;
    inv.balance = inv
        .balance
        .checked_add(amount)
        .ok_or(PoolError::MathOverflow)?;
    inv.append_history(HistoryKind::Seed, Currency::Funding, amount, now)?;

    let st = &mut ctx.accounts.pool_state;
    st.total_invested = new_total;

    emit!(Invested {
        investor: ctx.accounts.investor.key(),
        id,
        amount,
        start_time: now,
        total_invested: st.total_invested,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Invest<'info> {
    #[account(
        mut,
        seeds = [b"pool_state", pool_state.reward_mint.as_ref()],
        bump
    )]
    pub pool_state: Account<'info, PoolState>,

    #[account(
        init_if_needed,
        payer = investor,
        space = InvestorState::space(),
        seeds = [b"investor", pool_state.key().as_ref(), investor.key().as_ref()],
        bump
    )]
    pub investor_state: Box<Account<'info, InvestorState>>,

    /// Investor's funding-token account the contribution is pulled from.
    #[account(mut)]
    pub funding_source: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = treasury.key() == pool_state.treasury @ PoolError::InvalidTokenAccount,
    )]
    pub treasury: Account<'info, TokenAccount>,

    #[account(mut)]
    pub investor: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct Invested {
    pub investor: Pubkey,
    pub id: u32,
    pub amount: u64,
    pub start_time: i64,
    pub total_invested: u64,
}
