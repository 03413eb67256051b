pub use crate::clock::TestClock;
pub use crate::test::*;
pub use crate::token::TokenLedgerFixture;
pub use crate::utils::*;
pub use crate::{assert_custom_error, assert_eq_noise, native, time};
