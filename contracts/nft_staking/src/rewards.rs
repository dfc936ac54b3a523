//! Pure accrual arithmetic for staked tokens.
//!
//! Everything here is deterministic given an explicit `now`; the ledger clock
//! is sampled once per entry point and threaded in, never read here.

/// The clock value at which a record starts (or resumes) earning.
///
/// A record earns nothing before `staked_at + reward_delay`, and nothing
/// before its accrual baseline (advanced on every claim and on unstake).
pub fn effective_start(staked_at: u64, reward_delay: u64, accrued_baseline: u64) -> u64 {
    staked_at.saturating_add(reward_delay).max(accrued_baseline)
}

/// Reward earned by a single `Staked` record since its last settlement.
///
/// `elapsed × rate` with floor/integer semantics. Saturates instead of
/// wrapping; `rate` is validated non-negative at the admin boundary.
pub fn accrued(
    now: u64,
    staked_at: u64,
    reward_delay: u64,
    accrued_baseline: u64,
    reward_rate: i128,
) -> i128 {
    let start = effective_start(staked_at, reward_delay, accrued_baseline);
    if now <= start {
        return 0;
    }
    let elapsed = now - start;
    (elapsed as i128).saturating_mul(reward_rate)
}
