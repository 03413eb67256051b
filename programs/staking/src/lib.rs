//! A fixed-rate staking campaign ledger.
//!
//! An admin funds one campaign with a reward budget and an annual rate. Participants deposit
//! principal while the campaign window is open and, on exit, receive it back together with a
//! yield proportional to the time it was staked. The total principal the pool admits is capped so
//! that the funded reward covers every admitted unit earning the full rate for the full campaign.
//!
//! Value movement and time are supplied by the host through [`ports::ValueTransferPort`] and
//! [`ports::Clock`].

pub mod macros;

pub mod config;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod ports;
pub mod prelude;
pub mod state;
pub mod utils;

pub use engine::StakingEngine;
pub use prelude::*;
pub use stakingtypecrate::types;
