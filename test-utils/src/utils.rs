use fixed::types::I80F48;
use staking::constants::STAKING_MINT_DECIMALS;
use std::sync::Once;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const RUST_LOG_DEFAULT: &str = "staking=info";

static TRACING: Once = Once::new();

/// Install a compact log subscriber writing through the test harness. `RUST_LOG` overrides the
/// default filter.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(RUST_LOG_DEFAULT));
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_test_writer(),
            )
            .try_init();
    });
}

/// Native staking units to whole tokens.
pub fn to_ui(native: u64) -> I80F48 {
    I80F48::from_num(native) / I80F48::from_num(10_u64.pow(STAKING_MINT_DECIMALS as u32))
}

#[macro_export]
macro_rules! assert_custom_error {
    ($result:expr, $matcher:expr) => {
        match $result {
            Err(err) => assert_eq!(err, $matcher),
            Ok(_) => panic!("expected error {:?}, got Ok", $matcher),
        }
    };
}

#[macro_export]
macro_rules! assert_eq_noise {
    ($a:expr, $b:expr, $tolerance:expr) => {
        let diff = ($a - $b).abs();
        assert!(
            diff <= $tolerance,
            "Difference between {} and {} larger than {} tolerated",
            $a,
            $b,
            $tolerance
        )
    };
}

#[macro_export]
macro_rules! native {
    ($val: expr, "STAKE") => {
        $val * 10_u64.pow(9)
    };

    ($val: expr, "STAKE", f64) => {
        (($val) * 10_u64.pow(9) as f64) as u64
    };

    ($val: expr, $decimals: expr) => {
        $val * 10_u64.pow($decimals as u32)
    };
}

#[macro_export]
macro_rules! time {
    ($val: expr) => {
        $val
    };

    ($val: expr, "s") => {
        $val
    };

    ($val: expr, "m") => {
        $val * 60
    };

    ($val: expr, "h") => {
        $val * 60 * 60
    };

    ($val: expr, "d") => {
        $val * 60 * 60 * 24
    };

    ($val: expr, "y") => {
        $val * 60 * 60 * 24 * 365
    };
}
