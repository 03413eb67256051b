use stakingtypecrate::types::{CampaignParameters, PoolAggregates};

use crate::{math_error, prelude::*};

pub trait PoolAggregatesImpl {
    /// Account an admitted deposit. `opens_position` is false for a re-stake.
    fn record_deposit(&mut self, amount: u64, opens_position: bool) -> StakingResult;

    /// Account a closed position: its external capital leaves `total_staked`, and the reward
    /// share of its payout is added to `total_rewards_paid`.
    fn record_exit(&mut self, deposited: u64, reward: u64) -> StakingResult;

    fn record_unused_rewards_withdrawal(&mut self, amount: u64) -> StakingResult;

    /// Reward not yet paid out or returned to the admin.
    fn remaining_reward_budget(&self, campaign: &CampaignParameters) -> StakingResult<u64>;

    /// Units the pool currently holds: funded reward plus open principal, minus everything paid.
    fn pool_balance(&self, campaign: &CampaignParameters) -> StakingResult<u64>;
}

impl PoolAggregatesImpl for PoolAggregates {
    fn record_deposit(&mut self, amount: u64, opens_position: bool) -> StakingResult {
        self.total_staked = self
            .total_staked
            .checked_add(amount)
            .ok_or_else(math_error!())?;
        self.total_deposited = self
            .total_deposited
            .checked_add(amount)
            .ok_or_else(math_error!())?;

        if opens_position {
            self.open_positions = self
                .open_positions
                .checked_add(1)
                .ok_or_else(math_error!())?;
        }

        Ok(())
    }

    fn record_exit(&mut self, deposited: u64, reward: u64) -> StakingResult {
        self.total_staked = self
            .total_staked
            .checked_sub(deposited)
            .ok_or_else(math_error!())?;
        self.total_rewards_paid = self
            .total_rewards_paid
            .checked_add(reward)
            .ok_or_else(math_error!())?;
        self.open_positions = self
            .open_positions
            .checked_sub(1)
            .ok_or_else(math_error!())?;

        Ok(())
    }

    fn record_unused_rewards_withdrawal(&mut self, amount: u64) -> StakingResult {
        self.unused_rewards_withdrawn = self
            .unused_rewards_withdrawn
            .checked_add(amount)
            .ok_or_else(math_error!())?;

        Ok(())
    }

    fn remaining_reward_budget(&self, campaign: &CampaignParameters) -> StakingResult<u64> {
        campaign
            .funded_reward
            .checked_sub(self.total_rewards_paid)
            .ok_or_else(math_error!())?
            .checked_sub(self.unused_rewards_withdrawn)
            .ok_or_else(math_error!())
    }

    fn pool_balance(&self, campaign: &CampaignParameters) -> StakingResult<u64> {
        self.remaining_reward_budget(campaign)?
            .checked_add(self.total_staked)
            .ok_or_else(math_error!())
    }
}
