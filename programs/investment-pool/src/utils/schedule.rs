//! Reward accrual, lock enforcement and view math. All functions are pure:
//! they take the caller-supplied `now` and never touch account state.
//!
//! Two independent clocks per record:
//! - reward: nothing vests before `reward_start_delay`, then one month per
//!   `reward_interval` up to `max_months`;
//! - lock: the invested amount is untransferable until
//!   `start_time + lock_duration`.

use crate::constants::BASIS_POINT;
use crate::error::PoolError;
use crate::state::{InvestmentRecord, Schedule};

/// Reward months vested for a record started at `start_time`, as of `now`.
/// Monotonic non-decreasing in `now`; always in `[0, max_months]`.
pub fn vested_months(sched: &Schedule, start_time: i64, now: i64) -> u16 {
    let elapsed = now.saturating_sub(start_time);
    if elapsed < sched.reward_start_delay {
        return 0;
    }
    if sched.reward_interval <= 0 || sched.max_months == 0 {
        // Rejected at pool initialization; treat as nothing vested.
        return 0;
    }
    let full_schedule = (sched.max_months as i64)
        .saturating_mul(sched.reward_interval)
        .saturating_add(sched.reward_start_delay);
    let elapsed = elapsed.min(full_schedule);
    let months = (elapsed - sched.reward_start_delay) / sched.reward_interval;
    months.min(sched.max_months as i64) as u16
}

/// Reward owed for `months` reward periods on `amount`, floor division in
/// basis points. Rounds down, never up.
pub fn reward_for_months(amount: u64, bps_per_month: u64, months: u16) -> Result<u64, PoolError> {
    let v = (amount as u128)
        .checked_mul(bps_per_month as u128)
        .ok_or(PoolError::MathOverflow)?
        .checked_mul(months as u128)
        .ok_or(PoolError::MathOverflow)?
        / (BASIS_POINT as u128);
    u64::try_from(v).map_err(|_| PoolError::MathOverflow)
}

/// Claim computation: new total claimed-months and the reward owed for the
/// newly vested months. Mutates nothing; the caller applies the result via
/// `InvestmentRecord::apply_claim` before moving any tokens.
pub fn claimable(
    sched: &Schedule,
    rec: &InvestmentRecord,
    now: i64,
) -> Result<(u16, u64), PoolError> {
    if rec.reward_finished {
        return Err(PoolError::RewardScheduleFinished);
    }
    if now.saturating_sub(rec.start_time) < sched.reward_start_delay {
        return Err(PoolError::RewardNotStarted);
    }
    let vested = vested_months(sched, rec.start_time, now);
    if vested <= rec.claimed_months {
        return Err(PoolError::NothingToClaim);
    }
    let newly_vested = vested - rec.claimed_months;
    let reward = reward_for_months(rec.amount, sched.reward_bps_per_month, newly_vested)?;
    Ok((vested, reward))
}

/// Read-only variant of `claimable`: 0 for every condition that would fail
/// (not started, nothing new, already finished).
pub fn pending_reward(sched: &Schedule, rec: &InvestmentRecord, now: i64) -> u64 {
    claimable(sched, rec, now).map(|(_, reward)| reward).unwrap_or(0)
}

/// Timestamp at which a record's amount unlocks.
pub fn end_time(start_time: i64, lock_duration: i64) -> i64 {
    start_time.saturating_add(lock_duration)
}

/// True while the record's amount is excluded from transferable balance.
/// Keyed purely by record age, independent of claim state.
pub fn is_locked(rec: &InvestmentRecord, lock_duration: i64, now: i64) -> bool {
    now < end_time(rec.start_time, lock_duration)
}

/// Sum of amounts still lock-excluded from the account's balance as of `now`.
pub fn locked_balance(
    records: &[InvestmentRecord],
    lock_duration: i64,
    now: i64,
) -> Result<u64, PoolError> {
    let mut locked: u64 = 0;
    for rec in records {
        if is_locked(rec, lock_duration, now) {
            locked = locked
                .checked_add(rec.amount)
                .ok_or(PoolError::MathOverflow)?;
        }
    }
    Ok(locked)
}

/// Schedule completion in basis points of month count (not of value; the
/// per-month reward percentage need not equal `10000 / max_months`).
pub fn progress_bps(claimed_months: u16, max_months: u16) -> u64 {
    if max_months == 0 {
        return 0;
    }
    (claimed_months as u64) * BASIS_POINT / (max_months as u64)
}

/// Per-record projected values for the view layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvestmentProjection {
    pub claimed_value: u64,
    pub total_reward: u64,
    pub unclaimed_value: u64,
    pub end_time: i64,
    pub progress_bps: u64,
}

pub fn project(sched: &Schedule, rec: &InvestmentRecord) -> Result<InvestmentProjection, PoolError> {
    let claimed_value =
        reward_for_months(rec.amount, sched.reward_bps_per_month, rec.claimed_months)?;
    let total_reward =
        reward_for_months(rec.amount, sched.reward_bps_per_month, sched.max_months)?;
    Ok(InvestmentProjection {
        claimed_value,
        total_reward,
        unclaimed_value: total_reward.saturating_sub(claimed_value),
        end_time: end_time(rec.start_time, sched.lock_duration),
        progress_bps: progress_bps(rec.claimed_months, sched.max_months),
    })
}

/// Account-level rollup over all records.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InvestorRollup {
    pub total_amount: u64,
    pub total_claimed_value: u64,
    pub locked_amount: u64,
    pub unlocked_amount: u64,
}

pub fn summarize(
    sched: &Schedule,
    records: &[InvestmentRecord],
    now: i64,
) -> Result<InvestorRollup, PoolError> {
    let mut rollup = InvestorRollup::default();
    for rec in records {
        rollup.total_amount = rollup
            .total_amount
            .checked_add(rec.amount)
            .ok_or(PoolError::MathOverflow)?;
        let claimed_value =
            reward_for_months(rec.amount, sched.reward_bps_per_month, rec.claimed_months)?;
        rollup.total_claimed_value = rollup
            .total_claimed_value
            .checked_add(claimed_value)
            .ok_or(PoolError::MathOverflow)?;
        if is_locked(rec, sched.lock_duration, now) {
            rollup.locked_amount = rollup
                .locked_amount
                .checked_add(rec.amount)
                .ok_or(PoolError::MathOverflow)?;
        } else {
            rollup.unlocked_amount = rollup
                .unlocked_amount
                .checked_add(rec.amount)
                .ok_or(PoolError::MathOverflow)?;
        }
    }
    Ok(rollup)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: i64 = 2_592_000; // 30 days

    fn sched_24() -> Schedule {
        Schedule {
            reward_start_delay: 12 * PERIOD,
            reward_interval: PERIOD,
            max_months: 24,
            reward_bps_per_month: 100, // 1% per month
            lock_duration: 36 * PERIOD,
        }
    }

    fn rec(amount: u64, start_time: i64) -> InvestmentRecord {
        InvestmentRecord {
            id: 0,
            amount,
            start_time,
            claimed_months: 0,
            reward_finished: false,
        }
    }

    #[test]
    fn nothing_vests_before_start_delay() {
        let s = sched_24();
        assert_eq!(vested_months(&s, 0, 0), 0);
        assert_eq!(vested_months(&s, 0, 11 * PERIOD), 0);
        assert_eq!(vested_months(&s, 0, 12 * PERIOD - 1), 0);
        // Delay elapsed but no full interval yet.
        assert_eq!(vested_months(&s, 0, 12 * PERIOD), 0);
        assert_eq!(vested_months(&s, 0, 13 * PERIOD), 1);
    }

    #[test]
    fn vested_months_is_monotonic_and_bounded() {
        let s = sched_24();
        let mut prev = 0u16;
        for step in 0..120 {
            let now = step * PERIOD / 2;
            let m = vested_months(&s, 0, now);
            assert!(m >= prev);
            assert!(m <= s.max_months);
            prev = m;
        }
        // Far beyond the schedule it stays saturated.
        assert_eq!(vested_months(&s, 0, 1000 * PERIOD), 24);
    }

    #[test]
    fn first_month_claim_after_delay() {
        let s = sched_24();
        let r = rec(1000, 0);

        // T + 11 periods: before the start delay.
        assert!(matches!(
            claimable(&s, &r, 11 * PERIOD),
            Err(PoolError::RewardNotStarted)
        ));
        assert_eq!(pending_reward(&s, &r, 11 * PERIOD), 0);

        // T + 13 periods: exactly one month vested, 1% of 1000.
        let (months, reward) = claimable(&s, &r, 13 * PERIOD).unwrap();
        assert_eq!(months, 1);
        assert_eq!(reward, 10);
    }

    #[test]
    fn repeat_claim_at_same_instant() {
        let s = sched_24();
        let mut r = rec(1000, 0);
        let (months, _) = claimable(&s, &r, 13 * PERIOD).unwrap();
        r.apply_claim(months, s.max_months).unwrap();
        assert!(matches!(
            claimable(&s, &r, 13 * PERIOD),
            Err(PoolError::NothingToClaim)
        ));
    }

    #[test]
    fn full_schedule_then_finished() {
        let s = sched_24();
        let mut r = rec(1000, 0);
        let (months, _) = claimable(&s, &r, 13 * PERIOD).unwrap();
        r.apply_claim(months, s.max_months).unwrap();

        let now = (12 + 24) * PERIOD;
        let (months, reward) = claimable(&s, &r, now).unwrap();
        assert_eq!(months, 24);
        assert_eq!(reward, 230); // 23 remaining months at 1%
        r.apply_claim(months, s.max_months).unwrap();
        assert!(r.reward_finished);

        assert!(matches!(
            claimable(&s, &r, now + PERIOD),
            Err(PoolError::RewardScheduleFinished)
        ));
        assert_eq!(pending_reward(&s, &r, now + PERIOD), 0);
    }

    #[test]
    fn pending_reward_is_idempotent() {
        let s = sched_24();
        let r = rec(777, 5);
        let now = 20 * PERIOD;
        let first = pending_reward(&s, &r, now);
        for _ in 0..10 {
            assert_eq!(pending_reward(&s, &r, now), first);
        }
    }

    #[test]
    fn reward_conservation_over_arbitrary_claims() {
        let s = sched_24();
        let mut r = rec(999, 0);
        let cap = reward_for_months(r.amount, s.reward_bps_per_month, s.max_months).unwrap();

        let mut paid: u64 = 0;
        // Claim at irregular instants, including far past the schedule end.
        for now in [13 * PERIOD, 14 * PERIOD, 20 * PERIOD + 17, 500 * PERIOD] {
            if let Ok((months, reward)) = claimable(&s, &r, now) {
                r.apply_claim(months, s.max_months).unwrap();
                paid += reward;
                assert!(paid <= cap);
            }
        }
        assert!(r.reward_finished);
        // Per-claim flooring may round down more than one big claim would,
        // but never rounds up past the cap.
        assert!(paid <= cap);

        // A single claim over the whole schedule pays exactly the cap.
        let mut whole = rec(999, 0);
        let (months, reward) = claimable(&s, &whole, 500 * PERIOD).unwrap();
        whole.apply_claim(months, s.max_months).unwrap();
        assert_eq!(reward, cap);
    }

    #[test]
    fn reward_rounds_down() {
        // 333 * 100 / 10000 = 3.33 -> 3
        assert_eq!(reward_for_months(333, 100, 1).unwrap(), 3);
        assert_eq!(reward_for_months(99, 100, 1).unwrap(), 0);
    }

    #[test]
    fn lock_releases_exactly_at_end() {
        let s = sched_24();
        let records = [rec(500, 0)];

        assert_eq!(locked_balance(&records, s.lock_duration, 35 * PERIOD).unwrap(), 500);
        assert_eq!(
            locked_balance(&records, s.lock_duration, 36 * PERIOD - 1).unwrap(),
            500
        );
        assert_eq!(locked_balance(&records, s.lock_duration, 36 * PERIOD).unwrap(), 0);
        assert_eq!(locked_balance(&records, s.lock_duration, 50 * PERIOD).unwrap(), 0);
    }

    #[test]
    fn lock_and_reward_clocks_are_independent() {
        let s = sched_24();
        let mut r = rec(400, 0);

        // Fully harvested at 36 periods, yet still locked one second before
        // the lock boundary.
        let (months, _) = claimable(&s, &r, 36 * PERIOD).unwrap();
        r.apply_claim(months, s.max_months).unwrap();
        assert!(r.reward_finished);
        assert!(is_locked(&r, s.lock_duration, 36 * PERIOD - 1));

        // Shorter lock than schedule: unlocked while still accruing.
        let short = Schedule {
            lock_duration: 6 * PERIOD,
            ..s
        };
        let r2 = rec(400, 0);
        assert!(!is_locked(&r2, short.lock_duration, 7 * PERIOD));
        assert_eq!(vested_months(&short, r2.start_time, 7 * PERIOD), 0);
    }

    #[test]
    fn projection_values() {
        let s = sched_24();
        let mut r = rec(1000, 100);
        r.apply_claim(6, s.max_months).unwrap();

        let p = project(&s, &r).unwrap();
        assert_eq!(p.claimed_value, 60);
        assert_eq!(p.total_reward, 240);
        assert_eq!(p.unclaimed_value, 180);
        assert_eq!(p.end_time, 100 + 36 * PERIOD);
        assert_eq!(p.progress_bps, 6 * 10_000 / 24);
    }

    #[test]
    fn progress_counts_months_not_value() {
        // 12-month schedule at 2% per month: value progress would differ.
        assert_eq!(progress_bps(3, 12), 2500);
        assert_eq!(progress_bps(12, 12), 10_000);
        assert_eq!(progress_bps(0, 12), 0);
    }

    #[test]
    fn summary_equals_per_record_sums() {
        let s = sched_24();
        let mut records = vec![rec(1000, 0), rec(250, 10 * PERIOD), rec(4000, 40 * PERIOD)];
        records[0].apply_claim(5, s.max_months).unwrap();
        records[1].apply_claim(1, s.max_months).unwrap();

        let now = 37 * PERIOD;
        let rollup = summarize(&s, &records, now).unwrap();

        let mut total = 0u64;
        let mut claimed = 0u64;
        let mut locked = 0u64;
        let mut unlocked = 0u64;
        for r in &records {
            total += r.amount;
            claimed += project(&s, r).unwrap().claimed_value;
            if is_locked(r, s.lock_duration, now) {
                locked += r.amount;
            } else {
                unlocked += r.amount;
            }
        }
        assert_eq!(rollup.total_amount, total);
        assert_eq!(rollup.total_claimed_value, claimed);
        assert_eq!(rollup.locked_amount, locked);
        assert_eq!(rollup.unlocked_amount, unlocked);
        assert_eq!(rollup.locked_amount + rollup.unlocked_amount, total);
        // First record unlocked at 36 periods, third still locked.
        assert_eq!(rollup.locked_amount, 250 + 4000);
    }

    #[test]
    fn twelve_month_variant() {
        let s = Schedule {
            reward_start_delay: PERIOD,
            reward_interval: PERIOD,
            max_months: 12,
            reward_bps_per_month: 200,
            lock_duration: 36 * PERIOD,
        };
        let r = rec(10_000, 0);
        assert_eq!(vested_months(&s, 0, 13 * PERIOD), 12);
        assert_eq!(vested_months(&s, 0, 14 * PERIOD), 12);
        let (months, reward) = claimable(&s, &r, 13 * PERIOD).unwrap();
        assert_eq!(months, 12);
        assert_eq!(reward, 2400);
    }
}
