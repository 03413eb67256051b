use std::collections::HashMap;

use stakingtypecrate::types::{Pubkey, StakePosition};

use crate::state::position::PositionImpl;

/// Positions stored in an arena, one slot per participant ever seen. A closed position keeps its
/// (zeroed) slot, so the participant reuses it on the next deposit.
#[derive(Debug, Default, Clone)]
pub struct PositionLedger {
    slots: HashMap<Pubkey, usize>,
    positions: Vec<StakePosition>,
}

impl PositionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, owner: &Pubkey) -> Option<&StakePosition> {
        self.slots.get(owner).map(|&slot| &self.positions[slot])
    }

    /// The owner's position if it is open.
    pub fn get_open(&self, owner: &Pubkey) -> Option<&StakePosition> {
        self.get(owner).filter(|position| position.is_open())
    }

    /// Write `position` into its owner's slot, allocating one on first use.
    pub fn upsert(&mut self, position: StakePosition) {
        match self.slots.get(&position.owner) {
            Some(&slot) => self.positions[slot] = position,
            None => {
                self.slots.insert(position.owner, self.positions.len());
                self.positions.push(position);
            }
        }
    }

    /// Zero the owner's position. Returns the position as it was before closing.
    pub fn close(&mut self, owner: &Pubkey) -> Option<StakePosition> {
        let &slot = self.slots.get(owner)?;
        let position = &mut self.positions[slot];
        let closed = *position;
        position.close();

        Some(closed)
    }

    pub fn open_positions(&self) -> impl Iterator<Item = &StakePosition> {
        self.positions.iter().filter(|position| position.is_open())
    }

    /// Number of participants that ever held a position.
    pub fn participants(&self) -> usize {
        self.slots.len()
    }
}
