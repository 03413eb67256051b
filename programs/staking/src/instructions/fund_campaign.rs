use stakingtypecrate::types::{CampaignParameters, Pubkey};

use crate::{
    check,
    events::{CampaignFundedEvent, EventSink},
    math_error,
    ports::{Clock, ValueTransferPort},
    prelude::*,
    state::capacity::calc_max_principal,
};

impl<P, C, S> StakingEngine<P, C, S>
where
    P: ValueTransferPort,
    C: Clock,
    S: EventSink,
{
    /// Sets up the campaign and pulls its reward budget from the funder.
    ///
    /// # Arguments
    /// * `funder`: Must be the engine admin. The reward is pulled from this account.
    /// * `start_time`: Unix timestamp at which staking opens. The campaign finishes one
    ///   configured duration later.
    /// * `funded_reward`: Reward budget, in native units.
    /// * `annual_rate_bps`: Annual yield in basis points.
    ///
    /// # Errors
    /// * `StakingError::Unauthorized` if `funder` is not the admin.
    /// * `StakingError::CampaignAlreadyFunded` if a campaign exists. There is one per engine.
    /// * `StakingError::RewardAboveLimit` if `funded_reward` exceeds the configured ceiling.
    /// * `StakingError::InvalidStartTime` if `start_time` is not in the future.
    /// * `StakingError::ZeroCampaignParameter` if the reward or the rate is zero.
    /// * `StakingError::Transfer` if the reward could not be pulled. Nothing is recorded.
    pub fn fund_campaign(
        &mut self,
        funder: Pubkey,
        start_time: i64,
        funded_reward: u64,
        annual_rate_bps: u64,
    ) -> StakingResult {
        check!(funder == self.admin, StakingError::Unauthorized);
        check!(self.campaign.is_none(), StakingError::CampaignAlreadyFunded);
        check!(
            funded_reward <= self.config.reward_ceiling,
            StakingError::RewardAboveLimit,
            "Reward {} above limit {}",
            funded_reward,
            self.config.reward_ceiling
        );

        let now = self.clock.now();
        check!(
            start_time > now,
            StakingError::InvalidStartTime,
            "Start time {} is not after current time {}",
            start_time,
            now
        );
        check!(
            annual_rate_bps != 0 && funded_reward != 0,
            StakingError::ZeroCampaignParameter
        );

        // Duration fits an i64, checked when the config was validated
        let finish_time = start_time
            .checked_add(self.config.duration_seconds as i64)
            .ok_or_else(math_error!())?;
        let max_principal = calc_max_principal(funded_reward, annual_rate_bps)?;

        let campaign = CampaignParameters::new(
            funder,
            start_time,
            finish_time,
            annual_rate_bps,
            self.config.duration_seconds,
            self.config.cooldown_seconds,
            funded_reward,
            max_principal,
        );

        self.pull(&funder, funded_reward)?;
        self.campaign = Some(campaign);

        tracing::info!(
            start_time,
            finish_time,
            funded_reward,
            annual_rate_bps,
            max_principal,
            "Campaign funded"
        );

        self.emit(CampaignFundedEvent {
            start_time,
            funded_reward,
            annual_rate_bps,
            finish_time,
            max_principal,
        });

        Ok(())
    }
}
