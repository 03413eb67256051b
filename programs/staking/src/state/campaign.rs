use fixed::types::I80F48;
use stakingtypecrate::types::CampaignParameters;

use crate::{prelude::*, state::reward::calc_apr};

pub trait CampaignImpl {
    /// Deposits are accepted from `start_time` on.
    fn is_started(&self, now: i64) -> bool;

    /// Deposits are refused strictly after `finish_time`.
    fn has_ended(&self, now: i64) -> bool;

    /// The time up to which yield accrues: `min(now, finish_time)`.
    fn evaluation_time(&self, now: i64) -> i64;

    fn apr(&self) -> StakingResult<I80F48>;
}

impl CampaignImpl for CampaignParameters {
    fn is_started(&self, now: i64) -> bool {
        now >= self.start_time
    }

    fn has_ended(&self, now: i64) -> bool {
        now > self.finish_time
    }

    fn evaluation_time(&self, now: i64) -> i64 {
        now.min(self.finish_time)
    }

    fn apr(&self) -> StakingResult<I80F48> {
        calc_apr(self.annual_rate_bps)
    }
}
