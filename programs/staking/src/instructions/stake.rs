use stakingtypecrate::types::{Pubkey, StakePosition};

use crate::{
    check,
    events::{EventSink, StakeEvent},
    ports::{Clock, ValueTransferPort},
    prelude::*,
    state::{
        campaign::CampaignImpl, capacity::check_capacity, cooldown::check_cooldown,
        pool::PoolAggregatesImpl, position::PositionImpl,
    },
};

impl<P, C, S> StakingEngine<P, C, S>
where
    P: ValueTransferPort,
    C: Clock,
    S: EventSink,
{
    /// Deposits `amount` into the participant's position.
    ///
    /// Opens a new position, or re-stakes into the open one: the yield accrued so far is folded
    /// into the principal together with `amount`, and the accrual clock restarts. Only `amount`
    /// counts against the pool capacity.
    ///
    /// # Errors
    /// Checked in this order, the first failure is returned:
    /// * `StakingError::ZeroStakeAmount` if `amount` is zero.
    /// * `StakingError::CampaignNotStarted` if the campaign is unfunded or has not started.
    /// * `StakingError::CampaignEnded` if the campaign finish has passed.
    /// * `StakingError::CooldownNotElapsed` on a re-stake within the cooldown.
    /// * `StakingError::StakeAboveCapacity` if the pool would exceed its maximum principal.
    /// * `StakingError::Transfer` if the deposit could not be pulled. Nothing is recorded.
    pub fn stake(&mut self, participant: Pubkey, amount: u64) -> StakingResult {
        check!(amount > 0, StakingError::ZeroStakeAmount);

        let campaign = self.funded_campaign(StakingError::CampaignNotStarted)?;
        let now = self.clock.now();
        check!(
            campaign.is_started(now),
            StakingError::CampaignNotStarted,
            "Staking opens at {}, now {}",
            campaign.start_time,
            now
        );
        check!(
            !campaign.has_ended(now),
            StakingError::CampaignEnded,
            "Staking closed at {}, now {}",
            campaign.finish_time,
            now
        );

        let existing = self.ledger.get_open(&participant).copied();
        if let Some(position) = &existing {
            check_cooldown(position, now, campaign.cooldown_seconds)?;
        }

        check_capacity(self.pool.total_staked, amount, campaign.max_principal)?;

        let position = match existing {
            Some(mut position) => {
                let pending_yield = position.pending_yield(&campaign, now)?;
                position.restake(amount, pending_yield, now)?;

                tracing::info!(
                    %participant,
                    amount,
                    pending_yield,
                    principal = position.principal,
                    "Re-staking into open position"
                );

                position
            }
            None => StakePosition::new(participant, amount, now),
        };

        let mut pool = self.pool;
        pool.record_deposit(amount, existing.is_none())?;

        self.pull(&participant, amount)?;
        self.ledger.upsert(position);
        self.pool = pool;

        tracing::info!(
            %participant,
            amount,
            total_staked = pool.total_staked,
            "Stake recorded"
        );

        self.emit(StakeEvent {
            participant,
            amount,
        });

        Ok(())
    }
}
