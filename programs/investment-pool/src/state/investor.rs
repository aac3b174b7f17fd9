use anchor_lang::prelude::*;

use crate::constants::{MAX_HISTORY_ENTRIES, MAX_INVESTMENTS_PER_ACCOUNT};
use crate::error::PoolError;

/// One time-locked investment. Append-only; `claimed_months` and
/// `reward_finished` are the only mutable fields and move only forward.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvestmentRecord {
    /// Dense ordinal within the owning account, equal to the record's
    /// index in the investments list. Never reused.
    pub id: u32,
    /// Reward-bearing tokens credited for this investment.
    pub amount: u64,
    /// Unix timestamp at creation.
    pub start_time: i64,
    /// Reward periods already paid out.
    pub claimed_months: u16,
    /// True iff `claimed_months` has reached the schedule maximum.
    pub reward_finished: bool,
}

impl InvestmentRecord {
    pub const SIZE: usize =
        4 +  // id
        8 +  // amount
        8 +  // start_time
        2 +  // claimed_months
        1;   // reward_finished

    /// Sole mutator after creation. Enforces strict monotonicity and the
    /// schedule cap, and keeps `reward_finished` equivalent to
    /// `claimed_months == max_months`.
    pub fn apply_claim(
        &mut self,
        new_claimed_months: u16,
        max_months: u16,
    ) -> std::result::Result<(), PoolError> {
        if self.reward_finished {
            return Err(PoolError::RewardScheduleFinished);
        }
        if new_claimed_months <= self.claimed_months {
            return Err(PoolError::NothingToClaim);
        }
        if new_claimed_months > max_months {
            return Err(PoolError::ClaimAboveScheduleMax);
        }
        self.claimed_months = new_claimed_months;
        self.reward_finished = new_claimed_months == max_months;
        Ok(())
    }
}

/// Audit-trail action kind.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryKind {
    /// Investment credited.
    Seed,
    /// Reward paid out.
    Claim,
}

/// Currency tag for a history entry.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Currency {
    Funding,
    Reward,
}

/// Write-once audit entry, appended on invest and claim.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub kind: HistoryKind,
    pub currency: Currency,
    pub amount: u64,
    pub timestamp: i64,
}

impl HistoryEntry {
    pub const SIZE: usize =
        1 +  // kind
        1 +  // currency
        8 +  // amount
        8;   // timestamp
}

/// Per-(pool, investor) state PDA. Space for the bounded lists is
/// allocated up front so appends never realloc.
#[account]
pub struct InvestorState {
    pub owner: Pubkey,
    /// Escrowed reward-token balance (invested principal held in the pool
    /// vault); the lock gate is applied against this balance on withdraw.
    pub balance: u64,
    /// Append-only investment records, `id` == index.
    pub investments: Vec<InvestmentRecord>,
    /// Append-only audit trail of seeds and claims.
    pub history: Vec<HistoryEntry>,
}

impl InvestorState {
    /// Space for discriminator + fixed-capacity vectors.
    pub const fn space() -> usize {
        8 +  // discriminator
        32 + // owner
        8 +  // balance
        4 + MAX_INVESTMENTS_PER_ACCOUNT * InvestmentRecord::SIZE +
        4 + MAX_HISTORY_ENTRIES * HistoryEntry::SIZE
    }

    /// Append a new record with the next dense id. The record sequence
    /// never shrinks, so `id` is stable for the life of the account.
    pub fn append_investment(
        &mut self,
        amount: u64,
        start_time: i64,
    ) -> std::result::Result<u32, PoolError> {
        if self.investments.len() >= MAX_INVESTMENTS_PER_ACCOUNT {
            return Err(PoolError::InvestmentLimitReached);
        }
        let id = self.investments.len() as u32;
        self.investments.push(InvestmentRecord {
            id,
            amount,
            start_time,
            claimed_months: 0,
            reward_finished: false,
        });
        Ok(id)
    }

    pub fn record(&self, index: u32) -> std::result::Result<&InvestmentRecord, PoolError> {
        self.investments
            .get(index as usize)
            .ok_or(PoolError::InvestmentNotFound)
    }

    pub fn record_mut(&mut self, index: u32) -> std::result::Result<&mut InvestmentRecord, PoolError> {
        self.investments
            .get_mut(index as usize)
            .ok_or(PoolError::InvestmentNotFound)
    }

    pub fn append_history(
        &mut self,
        kind: HistoryKind,
        currency: Currency,
        amount: u64,
        timestamp: i64,
    ) -> std::result::Result<(), PoolError> {
        if self.history.len() >= MAX_HISTORY_ENTRIES {
            return Err(PoolError::HistoryFull);
        }
        self.history.push(HistoryEntry {
            kind,
            currency,
            amount,
            timestamp,
        });
        Ok(())
    }

    /// Best-effort append for paths that must never fail on audit capacity:
    /// once the trail is full the entry is dropped and the ledger proceeds.
    /// Claims of already-vested rewards go through here, so a full trail can
    /// never make a reward schedule unpayable.
    pub fn append_history_best_effort(
        &mut self,
        kind: HistoryKind,
        currency: Currency,
        amount: u64,
        timestamp: i64,
    ) {
        if self.history.len() < MAX_HISTORY_ENTRIES {
            self.history.push(HistoryEntry {
                kind,
                currency,
                amount,
                timestamp,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> InvestorState {
        InvestorState {
            owner: Pubkey::default(),
            balance: 0,
            investments: Vec::new(),
            history: Vec::new(),
        }
    }

    #[test]
    fn ids_are_dense_and_ordered() {
        let mut st = state();
        assert_eq!(st.append_investment(100, 10).unwrap(), 0);
        assert_eq!(st.append_investment(200, 20).unwrap(), 1);
        assert_eq!(st.append_investment(300, 30).unwrap(), 2);
        for (i, rec) in st.investments.iter().enumerate() {
            assert_eq!(rec.id as usize, i);
            assert_eq!(rec.claimed_months, 0);
            assert!(!rec.reward_finished);
        }
        assert!(matches!(st.record(3), Err(PoolError::InvestmentNotFound)));
    }

    #[test]
    fn apply_claim_is_monotonic_and_capped() {
        let mut rec = InvestmentRecord {
            id: 0,
            amount: 1000,
            start_time: 0,
            claimed_months: 0,
            reward_finished: false,
        };
        rec.apply_claim(3, 24).unwrap();
        assert_eq!(rec.claimed_months, 3);
        assert!(!rec.reward_finished);

        // Not strictly increasing.
        assert!(matches!(rec.apply_claim(3, 24), Err(PoolError::NothingToClaim)));
        assert!(matches!(rec.apply_claim(2, 24), Err(PoolError::NothingToClaim)));

        // Over the cap.
        assert!(matches!(
            rec.apply_claim(25, 24),
            Err(PoolError::ClaimAboveScheduleMax)
        ));

        // Reaching the cap flips the finished flag, one way.
        rec.apply_claim(24, 24).unwrap();
        assert!(rec.reward_finished);
        assert_eq!(rec.claimed_months, 24);
        assert!(matches!(
            rec.apply_claim(25, 24),
            Err(PoolError::RewardScheduleFinished)
        ));
    }

    #[test]
    fn finished_iff_at_max() {
        let mut rec = InvestmentRecord {
            id: 0,
            amount: 1,
            start_time: 0,
            claimed_months: 0,
            reward_finished: false,
        };
        for m in 1..=12u16 {
            rec.apply_claim(m, 12).unwrap();
            assert_eq!(rec.reward_finished, rec.claimed_months == 12);
        }
    }

    #[test]
    fn full_history_never_blocks_claims() {
        let mut st = state();
        // Eleven positions on a 24-month schedule overflow the trail:
        // 11 seeds + 11 * 24 claim entries > MAX_HISTORY_ENTRIES.
        for _ in 0..11 {
            st.append_investment(1000, 0).unwrap();
            st.append_history(HistoryKind::Seed, Currency::Funding, 1000, 0)
                .unwrap();
        }

        let max = 24u16;
        for m in 1..=max {
            for idx in 0..st.investments.len() as u32 {
                st.record_mut(idx).unwrap().apply_claim(m, max).unwrap();
                st.append_history_best_effort(
                    HistoryKind::Claim,
                    Currency::Reward,
                    10,
                    m as i64,
                );
            }
        }

        // Trail saturated, but every schedule ran to completion.
        assert_eq!(st.history.len(), MAX_HISTORY_ENTRIES);
        assert!(st.investments.iter().all(|r| r.reward_finished));
        assert!(st
            .investments
            .iter()
            .all(|r| r.claimed_months == max));
    }

    #[test]
    fn history_is_append_only_and_bounded() {
        let mut st = state();
        for i in 0..MAX_HISTORY_ENTRIES {
            st.append_history(HistoryKind::Seed, Currency::Funding, i as u64, i as i64)
                .unwrap();
        }
        assert!(matches!(
            st.append_history(HistoryKind::Claim, Currency::Reward, 1, 1),
            Err(PoolError::HistoryFull)
        ));
        assert_eq!(st.history.len(), MAX_HISTORY_ENTRIES);
        assert_eq!(st.history[0].amount, 0);
    }
}
