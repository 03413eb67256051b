use std::time::{SystemTime, UNIX_EPOCH};

/// Source of the current unix timestamp, in seconds. Read once per operation.
pub trait Clock {
    fn now(&self) -> i64;
}

/// Wall clock time. Reports 0 if the system clock is set before the unix epoch.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> i64 {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_after_2023() {
        // 2023-04-20
        assert!(SystemClock.now() > 1_681_989_983);
    }
}
