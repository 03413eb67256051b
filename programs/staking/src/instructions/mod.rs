//! The mutating operations of [`crate::StakingEngine`], one per file.

pub mod fund_campaign;
pub mod stake;
pub mod unstake;
pub mod withdraw_unused_rewards;
