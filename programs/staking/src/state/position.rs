use bytemuck::Zeroable;
use stakingtypecrate::types::{CampaignParameters, StakePosition};

use crate::{math_error, prelude::*, state::reward::calc_pending_yield};

pub trait PositionImpl {
    fn pending_yield(&self, campaign: &CampaignParameters, now: i64) -> StakingResult<u64>;

    /// Fold `pending_yield` and the new `amount` into the principal and restart the accrual
    /// clock at `now`. Only `amount` counts as new external capital.
    fn restake(&mut self, amount: u64, pending_yield: u64, now: i64) -> StakingResult;

    /// Reset to the zeroed, inactive state.
    fn close(&mut self);
}

impl PositionImpl for StakePosition {
    fn pending_yield(&self, campaign: &CampaignParameters, now: i64) -> StakingResult<u64> {
        calc_pending_yield(self, campaign, now)
    }

    fn restake(&mut self, amount: u64, pending_yield: u64, now: i64) -> StakingResult {
        self.principal = self
            .principal
            .checked_add(pending_yield)
            .ok_or_else(math_error!())?
            .checked_add(amount)
            .ok_or_else(math_error!())?;
        self.deposited = self
            .deposited
            .checked_add(amount)
            .ok_or_else(math_error!())?;
        self.opened_at = now;

        Ok(())
    }

    fn close(&mut self) {
        *self = StakePosition::zeroed();
    }
}
