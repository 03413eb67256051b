pub mod campaign;
pub mod capacity;
pub mod cooldown;
pub mod ledger;
pub mod pool;
pub mod position;
pub mod reward;
