pub mod campaign;
pub mod pool;
pub mod position;
pub mod pubkey;

pub use campaign::*;
pub use pool::*;
pub use position::*;
pub use pubkey::*;
