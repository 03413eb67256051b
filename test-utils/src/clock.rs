use staking::ports::Clock;
use std::{cell::Cell, rc::Rc};

/// A clock the test moves by hand. Clones share the same time.
#[derive(Clone, Debug, Default)]
pub struct TestClock {
    now: Rc<Cell<i64>>,
}

impl TestClock {
    pub fn new(now: i64) -> Self {
        TestClock {
            now: Rc::new(Cell::new(now)),
        }
    }

    pub fn set(&self, timestamp: i64) {
        self.now.set(timestamp);
    }

    pub fn advance(&self, seconds: i64) {
        self.now.set(self.now.get() + seconds);
    }
}

impl Clock for TestClock {
    fn now(&self) -> i64 {
        self.now.get()
    }
}
