use fixed::types::I80F48;
use stakingtypecrate::types::{CampaignParameters, PoolAggregates, Pubkey, StakePosition};

use crate::{
    events::{EventSink, LogEventSink, StakingEvent},
    ports::{Clock, ValueTransferPort},
    prelude::*,
    state::{
        campaign::CampaignImpl,
        ledger::PositionLedger,
        pool::PoolAggregatesImpl,
        position::PositionImpl,
        reward::{calc_settlement, Settlement},
    },
};

/// The staking ledger for one campaign.
///
/// Every mutating operation takes `&mut self` and either commits completely or returns an error
/// with no state changed. Hosts that share an engine between threads wrap it in a mutex.
///
/// The operations live in [`crate::instructions`].
pub struct StakingEngine<P, C, S = LogEventSink> {
    pub(crate) admin: Pubkey,
    pub(crate) config: StakingConfig,
    pub(crate) campaign: Option<CampaignParameters>,
    pub(crate) ledger: PositionLedger,
    pub(crate) pool: PoolAggregates,
    pub(crate) transfer: P,
    pub(crate) clock: C,
    pub(crate) events: S,
}

impl<P, C> StakingEngine<P, C, LogEventSink>
where
    P: ValueTransferPort,
    C: Clock,
{
    /// Events go to the log. Use [`StakingEngine::with_event_sink`] to receive them.
    pub fn new(admin: Pubkey, config: StakingConfig, transfer: P, clock: C) -> StakingResult<Self> {
        Self::with_event_sink(admin, config, transfer, clock, LogEventSink::default())
    }
}

impl<P, C, S> StakingEngine<P, C, S>
where
    P: ValueTransferPort,
    C: Clock,
    S: EventSink,
{
    pub fn with_event_sink(
        admin: Pubkey,
        config: StakingConfig,
        transfer: P,
        clock: C,
        events: S,
    ) -> StakingResult<Self> {
        config.validate()?;

        Ok(StakingEngine {
            admin,
            config,
            campaign: None,
            ledger: PositionLedger::new(),
            pool: PoolAggregates::default(),
            transfer,
            clock,
            events,
        })
    }

    pub fn admin(&self) -> Pubkey {
        self.admin
    }

    pub fn config(&self) -> StakingConfig {
        self.config
    }

    pub fn is_funded(&self) -> bool {
        self.campaign.is_some()
    }

    pub fn campaign(&self) -> Option<CampaignParameters> {
        self.campaign
    }

    /// Zero until the campaign is funded.
    pub fn max_principal(&self) -> u64 {
        self.campaign.map_or(0, |campaign| campaign.max_principal)
    }

    /// Annual rate as a fraction, `None` until the campaign is funded.
    pub fn apr(&self) -> StakingResult<Option<I80F48>> {
        self.campaign.map(|campaign| campaign.apr()).transpose()
    }

    pub fn aggregates(&self) -> PoolAggregates {
        self.pool
    }

    /// The participant's position, zeroed if they hold none.
    pub fn position(&self, participant: &Pubkey) -> StakePosition {
        self.ledger.get(participant).copied().unwrap_or_default()
    }

    pub fn open_positions(&self) -> impl Iterator<Item = &StakePosition> {
        self.ledger.open_positions()
    }

    /// Yield the participant's open position has accrued so far. Zero without an open position.
    pub fn pending_yield(&self, participant: &Pubkey) -> StakingResult<u64> {
        match (self.campaign, self.ledger.get_open(participant)) {
            (Some(campaign), Some(position)) => {
                position.pending_yield(&campaign, self.clock.now())
            }
            _ => Ok(0),
        }
    }

    /// What `unstake` would pay the participant right now.
    pub fn preview_payout(&self, participant: &Pubkey) -> StakingResult<u64> {
        Ok(self.settlement_for(participant)?.1.payout)
    }

    /// Units held by the pool: unpaid reward budget plus open principal.
    pub fn pool_balance(&self) -> StakingResult<u64> {
        match self.campaign {
            Some(campaign) => self.pool.pool_balance(&campaign),
            None => Ok(0),
        }
    }

    pub fn transfer_port(&self) -> &P {
        &self.transfer
    }

    pub fn event_sink(&self) -> &S {
        &self.events
    }

    pub(crate) fn settlement_for(
        &self,
        participant: &Pubkey,
    ) -> StakingResult<(StakePosition, Settlement)> {
        let position = self.ledger.get_open(participant).copied().ok_or_else(|| {
            tracing::warn!(%participant, "No open position");
            StakingError::NotAParticipant
        })?;
        let campaign = self.funded_campaign(StakingError::CampaignNotFunded)?;
        let settlement = calc_settlement(&position, &campaign, &self.pool, self.clock.now())?;

        Ok((position, settlement))
    }

    pub(crate) fn funded_campaign(&self, err: StakingError) -> StakingResult<CampaignParameters> {
        self.campaign.ok_or_else(|| {
            tracing::warn!("Error \"{}\": campaign has not been funded", err);
            err
        })
    }

    pub(crate) fn pull(&mut self, from: &Pubkey, amount: u64) -> StakingResult {
        self.transfer.transfer_in(from, amount).map_err(|err| {
            tracing::warn!(%from, amount, "Transfer into pool failed: {}", err);
            StakingError::from(err)
        })
    }

    pub(crate) fn push(&mut self, to: &Pubkey, amount: u64) -> StakingResult {
        self.transfer.transfer_out(to, amount).map_err(|err| {
            tracing::warn!(%to, amount, "Transfer out of pool failed: {}", err);
            StakingError::from(err)
        })
    }

    pub(crate) fn emit(&mut self, event: impl Into<StakingEvent>) {
        let event = event.into();
        tracing::debug!(?event, "Emitting event");
        self.events.emit(event);
    }
}
