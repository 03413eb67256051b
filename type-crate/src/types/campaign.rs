use bytemuck::{Pod, Zeroable};

use crate::{assert_struct_align, assert_struct_size};

use super::Pubkey;

assert_struct_size!(CampaignParameters, 96);
assert_struct_align!(CampaignParameters, 8);

/// Parameters of the single reward campaign. Written once when the campaign is funded and
/// read-only afterwards.
#[repr(C)]
#[derive(Debug, Default, PartialEq, Eq, Pod, Zeroable, Copy, Clone)]
pub struct CampaignParameters {
    /// The account that funded the reward pool
    pub funder: Pubkey,
    /// Unix timestamp from which deposits are accepted
    pub start_time: i64,
    /// `start_time + duration_seconds`. Deposits are refused after it and yield stops accruing.
    pub finish_time: i64,
    /// Annual yield, in basis points of `RATE_BASE`
    pub annual_rate_bps: u64,
    pub duration_seconds: u64,
    /// Minimum time between two deposits into the same open position
    pub cooldown_seconds: u64,
    /// Reward budget, in native token units, pulled from the funder
    pub funded_reward: u64,
    /// Maximum total principal the pool admits. If every admitted unit earns the full annual rate
    /// for the full duration, `funded_reward` exactly covers it.
    pub max_principal: u64,
    _padding0: [u8; 8],
}

impl CampaignParameters {
    pub const LEN: usize = std::mem::size_of::<CampaignParameters>();

    #[allow(clippy::too_many_arguments)]
    pub fn new(
        funder: Pubkey,
        start_time: i64,
        finish_time: i64,
        annual_rate_bps: u64,
        duration_seconds: u64,
        cooldown_seconds: u64,
        funded_reward: u64,
        max_principal: u64,
    ) -> Self {
        CampaignParameters {
            funder,
            start_time,
            finish_time,
            annual_rate_bps,
            duration_seconds,
            cooldown_seconds,
            funded_reward,
            max_principal,
            ..Default::default()
        }
    }
}
