//! Collaborators the ledger consumes but never implements: the token ledger that moves value and
//! the clock that reports the current time.

pub mod clock;
pub mod transfer;

pub use clock::*;
pub use transfer::*;
