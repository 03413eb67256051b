use crate::{
    check,
    constants::{MAX_CAMPAIGN_REWARD, RESTAKE_COOLDOWN, STAKING_DURATION},
    prelude::*,
};

/// Engine-wide settings, fixed for the lifetime of an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StakingConfig {
    /// Campaign length, `finish_time - start_time`
    pub duration_seconds: u64,
    pub cooldown_seconds: u64,
    /// Largest reward a campaign may be funded with, in native units
    pub reward_ceiling: u64,
}

impl Default for StakingConfig {
    fn default() -> Self {
        StakingConfig {
            duration_seconds: STAKING_DURATION,
            cooldown_seconds: RESTAKE_COOLDOWN,
            reward_ceiling: MAX_CAMPAIGN_REWARD,
        }
    }
}

impl StakingConfig {
    pub fn validate(&self) -> StakingResult {
        check!(
            self.duration_seconds > 0,
            StakingError::InvalidConfig,
            "Campaign duration must be nonzero"
        );
        check!(
            i64::try_from(self.duration_seconds).is_ok()
                && i64::try_from(self.cooldown_seconds).is_ok(),
            StakingError::InvalidConfig,
            "Durations must fit a unix timestamp"
        );

        Ok(())
    }
}
