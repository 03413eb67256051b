use bytemuck::{Pod, Zeroable};

use crate::{
    assert_struct_align, assert_struct_size,
    constants::{POSITION_ACTIVE, POSITION_INACTIVE},
};

use super::Pubkey;

assert_struct_size!(StakePosition, 64);
assert_struct_align!(StakePosition, 8);

/// A participant's single open stake. Closing a position zeroes it.
#[repr(C)]
#[derive(Debug, Default, PartialEq, Eq, Pod, Zeroable, Copy, Clone)]
pub struct StakePosition {
    pub owner: Pubkey,
    /// Accruing base. Grows by each deposit and by the yield folded in on a re-stake.
    pub principal: u64,
    /// External capital only, i.e. the sum of the deposits into this position. Always
    /// `<= principal`, the difference is folded yield.
    pub deposited: u64,
    /// Timestamp of the most recent deposit. The accrual clock restarts here.
    pub opened_at: i64,
    pub active: u8,
    _padding0: [u8; 7],
}

impl StakePosition {
    pub const LEN: usize = std::mem::size_of::<StakePosition>();

    pub fn new(owner: Pubkey, amount: u64, opened_at: i64) -> Self {
        StakePosition {
            owner,
            principal: amount,
            deposited: amount,
            opened_at,
            active: POSITION_ACTIVE,
            ..Default::default()
        }
    }

    /// True for an active position that still holds principal.
    pub fn is_open(&self) -> bool {
        self.active != POSITION_INACTIVE && self.principal != 0
    }

    /// Yield folded into the principal by earlier re-stakes.
    pub fn folded_yield(&self) -> u64 {
        self.principal.saturating_sub(self.deposited)
    }
}
