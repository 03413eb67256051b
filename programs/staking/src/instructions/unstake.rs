use stakingtypecrate::types::Pubkey;

use crate::{
    events::{EventSink, UnstakeEvent},
    ports::{Clock, ValueTransferPort},
    prelude::*,
    state::pool::PoolAggregatesImpl,
};

impl<P, C, S> StakingEngine<P, C, S>
where
    P: ValueTransferPort,
    C: Clock,
    S: EventSink,
{
    /// Closes the participant's position and pays out principal plus reward.
    ///
    /// Yield accrues up to `min(now, finish_time)`, so settling after the campaign has ended is
    /// always possible and pays no more than settling at the finish.
    ///
    /// # Returns
    /// * The amount transferred to the participant.
    ///
    /// # Errors
    /// * `StakingError::NotAParticipant` if the participant has no open position.
    /// * `StakingError::Transfer` if the payout could not be pushed. The position stays open.
    pub fn unstake(&mut self, participant: Pubkey) -> StakingResult<u64> {
        let (position, settlement) = self.settlement_for(&participant)?;

        tracing::info!(
            %participant,
            principal = position.principal,
            deposited = position.deposited,
            accrued_yield = settlement.accrued_yield,
            reward = settlement.reward,
            "Settling position"
        );

        let mut pool = self.pool;
        pool.record_exit(position.deposited, settlement.reward)?;

        self.push(&participant, settlement.payout)?;
        self.ledger.close(&participant);
        self.pool = pool;

        tracing::info!(%participant, payout = settlement.payout, "Unstake recorded");

        self.emit(UnstakeEvent {
            participant,
            amount: settlement.payout,
        });

        Ok(settlement.payout)
    }
}
