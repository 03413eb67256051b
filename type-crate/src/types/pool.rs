use bytemuck::{Pod, Zeroable};

use crate::{assert_struct_align, assert_struct_size};

assert_struct_size!(PoolAggregates, 40);
assert_struct_align!(PoolAggregates, 8);

/// Pool-wide totals, all in native token units.
#[repr(C)]
#[derive(Debug, Default, PartialEq, Eq, Pod, Zeroable, Copy, Clone)]
pub struct PoolAggregates {
    /// External capital held by open positions. Never exceeds the campaign's `max_principal`.
    pub total_staked: u64,
    /// Reward paid out on exits, including yield that was folded into principal. Only increases.
    pub total_rewards_paid: u64,
    /// Every deposit ever admitted
    pub total_deposited: u64,
    /// Reward budget returned to the admin after the campaign finished
    pub unused_rewards_withdrawn: u64,
    pub open_positions: u64,
}
