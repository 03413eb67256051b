use stakingtypecrate::types::Pubkey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CampaignFundedEvent {
    pub start_time: i64,
    pub funded_reward: u64,
    pub annual_rate_bps: u64,
    pub finish_time: i64,
    pub max_principal: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StakeEvent {
    pub participant: Pubkey,
    pub amount: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnstakeEvent {
    pub participant: Pubkey,
    /// Principal plus reward, as transferred out
    pub amount: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnusedRewardsWithdrawnEvent {
    pub recipient: Pubkey,
    pub amount: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StakingEvent {
    CampaignFunded(CampaignFundedEvent),
    Staked(StakeEvent),
    Unstaked(UnstakeEvent),
    UnusedRewardsWithdrawn(UnusedRewardsWithdrawnEvent),
}

impl From<CampaignFundedEvent> for StakingEvent {
    fn from(event: CampaignFundedEvent) -> Self {
        StakingEvent::CampaignFunded(event)
    }
}

impl From<StakeEvent> for StakingEvent {
    fn from(event: StakeEvent) -> Self {
        StakingEvent::Staked(event)
    }
}

impl From<UnstakeEvent> for StakingEvent {
    fn from(event: UnstakeEvent) -> Self {
        StakingEvent::Unstaked(event)
    }
}

impl From<UnusedRewardsWithdrawnEvent> for StakingEvent {
    fn from(event: UnusedRewardsWithdrawnEvent) -> Self {
        StakingEvent::UnusedRewardsWithdrawn(event)
    }
}

/// Receives every event after the operation that produced it has committed. Events are
/// observation only, a sink cannot influence the ledger.
pub trait EventSink {
    fn emit(&mut self, event: StakingEvent);
}

/// Logs each event at info level. The sink engines get when none is supplied.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogEventSink {
    emitted: u64,
}

impl LogEventSink {
    /// Number of events logged so far.
    pub fn emitted(&self) -> u64 {
        self.emitted
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: StakingEvent) {
        self.emitted += 1;
        tracing::info!(?event, emitted = self.emitted, "Staking event");
    }
}

/// Drops events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullEventSink;

impl EventSink for NullEventSink {
    fn emit(&mut self, _event: StakingEvent) {}
}

impl EventSink for Vec<StakingEvent> {
    fn emit(&mut self, event: StakingEvent) {
        self.push(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: StakingEvent) {
        (**self).emit(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unstake_event() -> StakingEvent {
        UnstakeEvent {
            participant: Pubkey::new_unique(),
            amount: 110,
        }
        .into()
    }

    #[test]
    fn log_sink_counts_events() {
        let mut sink = LogEventSink::default();
        assert_eq!(sink.emitted(), 0);

        sink.emit(unstake_event());
        (&mut sink).emit(unstake_event());

        assert_eq!(sink.emitted(), 2);
    }

    #[test]
    fn vec_sink_records_in_order() {
        let mut sink: Vec<StakingEvent> = Vec::new();
        let event = unstake_event();
        sink.emit(event);
        NullEventSink.emit(event);

        assert_eq!(sink, vec![event]);
    }
}
