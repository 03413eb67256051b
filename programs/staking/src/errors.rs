use thiserror::Error;

use crate::ports::TransferError;

/// Coarse grouping of [`StakingError`]s. Every kind is raised before any state is mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected campaign setup or privileged call
    Configuration,
    /// Rejected deposit
    Admission,
    /// Operation not valid for the caller's current position
    State,
    /// The external value transfer failed, the operation was aborted
    Transfer,
    /// Checked arithmetic overflowed or divided by zero
    Math,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StakingError {
    #[error("Math error")] // 0
    MathError,
    #[error("Invalid staking config")] // 1
    InvalidConfig,
    #[error("Signer is not the campaign admin")] // 2
    Unauthorized,
    #[error("Campaign already funded")] // 3
    CampaignAlreadyFunded,
    #[error("Reward above campaign limit")] // 4
    RewardAboveLimit,
    #[error("Start time must be greater than current time")] // 5
    InvalidStartTime,
    #[error("One of the campaign parameters is zero")] // 6
    ZeroCampaignParameter,
    #[error("Campaign not funded")] // 7
    CampaignNotFunded,
    #[error("Staking has not started yet")] // 8
    CampaignNotStarted,
    #[error("Staking period has ended")] // 9
    CampaignEnded,
    #[error("Campaign has not ended yet")] // 10
    CampaignNotEnded,
    #[error("Can't stake 0 tokens")] // 11
    ZeroStakeAmount,
    #[error("Stake value exceeds pool capacity")] // 12
    StakeAboveCapacity,
    #[error("Re-stake cooldown has not elapsed")] // 13
    CooldownNotElapsed,
    #[error("Signer is not a participant")] // 14
    NotAParticipant,
    #[error("No unused rewards to withdraw")] // 15
    NoUnusedRewards,
    #[error("Value transfer failed: {0}")] // 16
    Transfer(#[from] TransferError),
}

impl StakingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StakingError::InvalidConfig
            | StakingError::Unauthorized
            | StakingError::CampaignAlreadyFunded
            | StakingError::RewardAboveLimit
            | StakingError::InvalidStartTime
            | StakingError::ZeroCampaignParameter => ErrorKind::Configuration,
            StakingError::CampaignNotStarted
            | StakingError::CampaignEnded
            | StakingError::ZeroStakeAmount
            | StakingError::StakeAboveCapacity
            | StakingError::CooldownNotElapsed => ErrorKind::Admission,
            StakingError::CampaignNotFunded
            | StakingError::CampaignNotEnded
            | StakingError::NotAParticipant
            | StakingError::NoUnusedRewards => ErrorKind::State,
            StakingError::Transfer(_) => ErrorKind::Transfer,
            StakingError::MathError => ErrorKind::Math,
        }
    }
}
