use fixed::types::I80F48;
use fixed_macro::types::I80F48;

pub const SECONDS_PER_DAY: u64 = 24 * 60 * 60;
pub const SECONDS_PER_YEAR: u64 = 365 * SECONDS_PER_DAY;

/// Length of a campaign, from `start_time` to `finish_time`.
pub const STAKING_DURATION: u64 = SECONDS_PER_YEAR;

/// Minimum spacing between two deposits into the same open position.
pub const RESTAKE_COOLDOWN: u64 = 10 * SECONDS_PER_DAY;

/// Annual rates are expressed in basis points: 1_000 is 10% per year.
pub const RATE_BASE: u64 = 10_000;
pub const RATE_BASE_I80F48: I80F48 = I80F48!(10_000);

/// Decimals of the staked (and reward) token. Every amount in the ledger is in native units.
pub const STAKING_MINT_DECIMALS: u8 = 9;

/// Hard ceiling on the reward a single campaign can be funded with: 500_000 whole tokens.
pub const MAX_CAMPAIGN_REWARD: u64 = 500_000 * 10_u64.pow(STAKING_MINT_DECIMALS as u32);

pub const POSITION_ACTIVE: u8 = 1;
pub const POSITION_INACTIVE: u8 = 0;
