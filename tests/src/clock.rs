//! Deterministic clocks

use std::cell::Cell;
use std::time::Duration;

use kemcheck::harness::Clock;

/// Clock advancing by `step` on every reading, starting at zero
#[derive(Debug)]
pub struct StepClock {
    step: Duration,
    readings: Cell<u32>,
}

impl StepClock {
    pub fn new(step: Duration) -> Self {
        Self { step, readings: Cell::new(0) }
    }

    /// Number of times the clock has been read
    pub fn readings(&self) -> u32 {
        self.readings.get()
    }
}

impl Clock for StepClock {
    fn now(&self) -> Duration {
        let n = self.readings.get();
        self.readings.set(n + 1);
        self.step * n
    }
}

/// Clock that never advances
#[derive(Debug, Default)]
pub struct FrozenClock;

impl Clock for FrozenClock {
    fn now(&self) -> Duration {
        Duration::ZERO
    }
}
