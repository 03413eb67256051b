pub mod clock;
pub mod prelude;
pub mod token;
pub mod utils;
