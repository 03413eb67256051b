pub type StakingResult<G = ()> = Result<G, StakingError>;

pub use crate::{
    config::StakingConfig,
    engine::StakingEngine,
    errors::{ErrorKind, StakingError},
    events::{EventSink, StakingEvent},
    ports::{Clock, TransferError, ValueTransferPort},
};
pub use stakingtypecrate::types::{CampaignParameters, PoolAggregates, Pubkey, StakePosition};
