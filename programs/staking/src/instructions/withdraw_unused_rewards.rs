use stakingtypecrate::types::Pubkey;

use crate::{
    check,
    events::{EventSink, UnusedRewardsWithdrawnEvent},
    math_error,
    ports::{Clock, ValueTransferPort},
    prelude::*,
    state::{campaign::CampaignImpl, pool::PoolAggregatesImpl, position::PositionImpl},
};

impl<P, C, S> StakingEngine<P, C, S>
where
    P: ValueTransferPort,
    C: Clock,
    S: EventSink,
{
    /// Returns the reward budget no open position can claim anymore to the admin.
    ///
    /// Only possible after the campaign finish, when yield has stopped accruing and every open
    /// position's final reward is known. Those rewards stay in the pool.
    ///
    /// # Returns
    /// * The amount transferred to the admin.
    ///
    /// # Errors
    /// * `StakingError::Unauthorized` if `caller` is not the admin.
    /// * `StakingError::CampaignNotFunded` if there is no campaign.
    /// * `StakingError::CampaignNotEnded` before the campaign finish.
    /// * `StakingError::NoUnusedRewards` if open positions are owed the whole remaining budget.
    /// * `StakingError::Transfer` if the withdrawal could not be pushed.
    pub fn withdraw_unused_rewards(&mut self, caller: Pubkey) -> StakingResult<u64> {
        check!(caller == self.admin, StakingError::Unauthorized);

        let campaign = self.funded_campaign(StakingError::CampaignNotFunded)?;
        let now = self.clock.now();
        check!(
            campaign.has_ended(now),
            StakingError::CampaignNotEnded,
            "Campaign finishes at {}, now {}",
            campaign.finish_time,
            now
        );

        let mut owed: u64 = 0;
        for position in self.ledger.open_positions() {
            let final_yield = position.pending_yield(&campaign, campaign.finish_time)?;
            owed = owed
                .checked_add(position.folded_yield())
                .ok_or_else(math_error!())?
                .checked_add(final_yield)
                .ok_or_else(math_error!())?;
        }

        let remaining_budget = self.pool.remaining_reward_budget(&campaign)?;
        let unused = remaining_budget.saturating_sub(owed);
        check!(
            unused > 0,
            StakingError::NoUnusedRewards,
            "Remaining budget {} fully owed to open positions ({})",
            remaining_budget,
            owed
        );

        let mut pool = self.pool;
        pool.record_unused_rewards_withdrawal(unused)?;

        self.push(&caller, unused)?;
        self.pool = pool;

        tracing::info!(
            %caller,
            unused,
            owed,
            "Unused rewards withdrawn"
        );

        self.emit(UnusedRewardsWithdrawnEvent {
            recipient: caller,
            amount: unused,
        });

        Ok(unused)
    }
}
