use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use gridline::Clock;

/// Deterministic clock for debounce tests: time only moves when the test
/// advances it.
#[derive(Clone)]
pub struct FakeClock {
    base: Instant,
    offset: Rc<Cell<Duration>>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            offset: Rc::new(Cell::new(Duration::ZERO)),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.offset.set(self.offset.get() + by);
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Instant {
        self.base + self.offset.get()
    }
}
