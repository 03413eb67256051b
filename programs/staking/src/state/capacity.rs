use crate::{check, constants::RATE_BASE, math_error, prelude::*};

/// The most principal the pool can admit while staying solvent:
/// `funded_reward * RATE_BASE / annual_rate_bps`, floored.
///
/// If every admitted unit earns the full annual rate for the whole campaign, the funded reward
/// covers it without any later top-up.
pub fn calc_max_principal(funded_reward: u64, annual_rate_bps: u64) -> StakingResult<u64> {
    let max_principal = u128::from(funded_reward)
        .checked_mul(u128::from(RATE_BASE))
        .ok_or_else(math_error!())?
        .checked_div(u128::from(annual_rate_bps))
        .ok_or_else(math_error!())?;

    u64::try_from(max_principal).map_err(|_| math_error!()())
}

/// Returns the pool's new total if `amount` can be admitted.
pub fn check_capacity(total_staked: u64, amount: u64, max_principal: u64) -> StakingResult<u64> {
    let new_total = total_staked
        .checked_add(amount)
        .ok_or(StakingError::StakeAboveCapacity)?;

    check!(
        new_total <= max_principal,
        StakingError::StakeAboveCapacity,
        "Stake of {} would bring the pool to {}, capacity is {}",
        amount,
        new_total,
        max_principal
    );

    Ok(new_total)
}
