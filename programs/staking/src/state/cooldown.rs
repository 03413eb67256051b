use stakingtypecrate::types::StakePosition;

use crate::{check, prelude::*};

/// A deposit into an open position must wait `cooldown_seconds` after the previous deposit.
/// Closed positions are never in cooldown.
pub fn check_cooldown(position: &StakePosition, now: i64, cooldown_seconds: u64) -> StakingResult {
    if !position.is_open() {
        return Ok(());
    }

    let elapsed = now.saturating_sub(position.opened_at).max(0) as u64;
    check!(
        elapsed >= cooldown_seconds,
        StakingError::CooldownNotElapsed,
        "Re-stake allowed {}s after the last deposit, {}s elapsed",
        cooldown_seconds,
        elapsed
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytemuck::Zeroable;
    use stakingtypecrate::types::Pubkey;

    #[test]
    fn restake_before_cooldown_is_rejected() {
        let position = StakePosition::new(Pubkey::new_unique(), 100, 1_000);

        assert_eq!(
            check_cooldown(&position, 1_000, 10),
            Err(StakingError::CooldownNotElapsed)
        );
        assert_eq!(
            check_cooldown(&position, 1_009, 10),
            Err(StakingError::CooldownNotElapsed)
        );
        assert!(check_cooldown(&position, 1_010, 10).is_ok());
        assert!(check_cooldown(&position, 9_999, 10).is_ok());
    }

    #[test]
    fn clock_behind_deposit_counts_as_no_time_elapsed() {
        let position = StakePosition::new(Pubkey::new_unique(), 100, 1_000);

        assert_eq!(
            check_cooldown(&position, 900, 10),
            Err(StakingError::CooldownNotElapsed)
        );
        assert!(check_cooldown(&position, 900, 0).is_ok());
    }

    #[test]
    fn closed_position_has_no_cooldown() {
        assert!(check_cooldown(&StakePosition::zeroed(), 0, 10).is_ok());
    }
}
