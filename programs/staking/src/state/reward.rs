use std::cmp::min;

use fixed::types::I80F48;
use stakingtypecrate::types::{CampaignParameters, PoolAggregates, StakePosition};

use crate::{
    constants::{RATE_BASE, RATE_BASE_I80F48},
    debug, math_error,
    prelude::*,
    state::{campaign::CampaignImpl, pool::PoolAggregatesImpl},
};

/// Simple, non-compounding yield on `principal` for `elapsed` seconds:
///
/// `principal * annual_rate_bps * elapsed / (RATE_BASE * duration)`
///
/// The product is formed in 128 bits before the single division, and the result is floored, so
/// the pool can only ever under-pay by less than one native unit.
pub fn calc_yield_for_period(
    principal: u64,
    annual_rate_bps: u64,
    elapsed: u64,
    duration: u64,
) -> StakingResult<u64> {
    if principal == 0 || elapsed == 0 {
        return Ok(0);
    }

    let numerator = u128::from(principal)
        .checked_mul(u128::from(annual_rate_bps))
        .ok_or_else(math_error!())?
        .checked_mul(u128::from(elapsed))
        .ok_or_else(math_error!())?;
    let denominator = u128::from(RATE_BASE)
        .checked_mul(u128::from(duration))
        .ok_or_else(math_error!())?;

    let yield_amount = numerator
        .checked_div(denominator)
        .ok_or_else(math_error!())?;

    u64::try_from(yield_amount).map_err(|_| math_error!()())
}

/// Annual rate as a fraction, e.g. 0.1 for 1_000 bps.
pub fn calc_apr(annual_rate_bps: u64) -> StakingResult<I80F48> {
    I80F48::from_num(annual_rate_bps)
        .checked_div(RATE_BASE_I80F48)
        .ok_or_else(math_error!())
}

/// Yield accrued by `position` since its last deposit, evaluated at `now` but never past the
/// campaign finish.
pub fn calc_pending_yield(
    position: &StakePosition,
    campaign: &CampaignParameters,
    now: i64,
) -> StakingResult<u64> {
    let evaluation_time = campaign.evaluation_time(now);
    let elapsed = evaluation_time.saturating_sub(position.opened_at).max(0) as u64;

    let pending = calc_yield_for_period(
        position.principal,
        campaign.annual_rate_bps,
        elapsed,
        campaign.duration_seconds,
    )?;

    debug!(
        "Pending yield {} on principal {} for {}s",
        pending,
        position.principal,
        elapsed
    );

    Ok(pending)
}

/// Amounts owed to a position when it exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    /// Yield accrued since the last deposit
    pub accrued_yield: u64,
    /// Reward share of the payout: folded yield plus accrued yield, capped at the remaining
    /// reward budget
    pub reward: u64,
    /// `deposited + reward`
    pub payout: u64,
}

pub fn calc_settlement(
    position: &StakePosition,
    campaign: &CampaignParameters,
    pool: &PoolAggregates,
    now: i64,
) -> StakingResult<Settlement> {
    let accrued_yield = calc_pending_yield(position, campaign, now)?;
    let reward_calculated = position
        .folded_yield()
        .checked_add(accrued_yield)
        .ok_or_else(math_error!())?;

    let remaining_budget = pool.remaining_reward_budget(campaign)?;
    let reward = min(reward_calculated, remaining_budget);

    if reward < reward_calculated {
        tracing::warn!(
            "Reward capped at remaining budget: paying {} ({} calculated)",
            reward,
            reward_calculated
        );
    }

    let payout = position
        .deposited
        .checked_add(reward)
        .ok_or_else(math_error!())?;

    Ok(Settlement {
        accrued_yield,
        reward,
        payout,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        assert_eq_with_tolerance,
        constants::{SECONDS_PER_DAY, STAKING_DURATION},
    };
    use fixed_macro::types::I80F48;
    use stakingtypecrate::types::Pubkey;

    const TOKEN: u64 = 1_000_000_000;

    fn campaign() -> CampaignParameters {
        CampaignParameters::new(
            Pubkey::new_unique(),
            1_000,
            1_000 + STAKING_DURATION as i64,
            1_000,
            STAKING_DURATION,
            10 * SECONDS_PER_DAY,
            500_000 * TOKEN,
            5_000_000 * TOKEN,
        )
    }

    #[test]
    /// principal: 400, apr: 10%, time: 1 year, expected yield: 40
    fn yield_10apr_1year() {
        assert_eq!(
            calc_yield_for_period(400 * TOKEN, 1_000, STAKING_DURATION, STAKING_DURATION).unwrap(),
            40 * TOKEN
        );
    }

    #[test]
    /// principal: 500, apr: 10%, time: 235 days, expected payout: ~532.19
    fn yield_10apr_235days() {
        let principal = 500 * TOKEN;
        let accrued = calc_yield_for_period(
            principal,
            1_000,
            235 * SECONDS_PER_DAY,
            STAKING_DURATION,
        )
        .unwrap();

        // 500 * 0.1 * 235 / 365 = 32.19178082...
        assert_eq!(accrued, 32_191_780_821);
        assert_eq_with_tolerance!(
            I80F48::from_num(principal + accrued) / I80F48::from_num(TOKEN),
            I80F48!(532.1918),
            I80F48!(0.0001)
        );
    }

    #[test]
    fn yield_rounds_down() {
        // 1 * 0.1 * 1s / 1y is far below one native unit
        assert_eq!(calc_yield_for_period(1, 1_000, 1, STAKING_DURATION).unwrap(), 0);
        // 3 units at 100% for a third of the duration is exactly 1
        assert_eq!(calc_yield_for_period(3, 10_000, 1, 3).unwrap(), 1);
        assert_eq!(calc_yield_for_period(5, 10_000, 1, 3).unwrap(), 1);
    }

    #[test]
    fn yield_overflow_is_a_math_error() {
        assert_eq!(
            calc_yield_for_period(u64::MAX, u64::MAX, u64::MAX, 1),
            Err(StakingError::MathError)
        );
        assert_eq!(
            calc_yield_for_period(1, 1_000, 1, 0),
            Err(StakingError::MathError)
        );
    }

    #[test]
    fn apr_as_fraction() {
        assert_eq_with_tolerance!(calc_apr(1_000).unwrap(), I80F48!(0.1), I80F48!(0.000001));
        assert_eq!(calc_apr(10_000).unwrap(), I80F48::ONE);
    }

    #[test]
    fn pending_yield_is_monotonic_and_flat_after_finish() {
        let campaign = campaign();
        let position = StakePosition::new(Pubkey::new_unique(), 100 * TOKEN, campaign.start_time);

        let mut last = 0;
        for day in 0..=365 {
            let now = campaign.start_time + (day * SECONDS_PER_DAY) as i64;
            let pending = calc_pending_yield(&position, &campaign, now).unwrap();
            assert!(pending >= last);
            last = pending;
        }
        assert_eq!(last, 10 * TOKEN);

        let after = calc_pending_yield(&position, &campaign, campaign.finish_time + 1_000_000);
        assert_eq!(after.unwrap(), 10 * TOKEN);
    }

    #[test]
    fn pending_yield_before_deposit_time_is_zero() {
        let campaign = campaign();
        let position = StakePosition::new(Pubkey::new_unique(), 100 * TOKEN, campaign.start_time);

        assert_eq!(
            calc_pending_yield(&position, &campaign, campaign.start_time - 50).unwrap(),
            0
        );
    }

    #[test]
    fn settlement_includes_folded_yield_and_respects_budget() {
        let campaign = campaign();
        let mut position =
            StakePosition::new(Pubkey::new_unique(), 100 * TOKEN, campaign.start_time);
        position.principal += 2 * TOKEN;

        let pool = PoolAggregates::default();
        let settlement =
            calc_settlement(&position, &campaign, &pool, campaign.finish_time).unwrap();
        assert_eq!(settlement.accrued_yield, 10_200_000_000);
        assert_eq!(settlement.reward, 12_200_000_000);
        assert_eq!(settlement.payout, 112_200_000_000);

        let drained = PoolAggregates {
            total_rewards_paid: campaign.funded_reward - TOKEN,
            ..Default::default()
        };
        let settlement =
            calc_settlement(&position, &campaign, &drained, campaign.finish_time).unwrap();
        assert_eq!(settlement.reward, TOKEN);
        assert_eq!(settlement.payout, 101 * TOKEN);
    }
}
