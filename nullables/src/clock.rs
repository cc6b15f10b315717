//! Nullable clock for driving time-dependent actions in tests.
//!
//! The engine never reads a wall clock; every time-dependent action takes
//! `now` as an input. Tests that model an ordered action stream use this to
//! produce those inputs.

use ore_types::Timestamp;
use std::cell::Cell;

/// A manually advanced time source.
pub struct NullClock {
    now: Cell<Timestamp>,
}

impl NullClock {
    pub fn new(start_secs: u64) -> Self {
        Self {
            now: Cell::new(Timestamp::new(start_secs)),
        }
    }

    /// The current instant.
    pub fn now(&self) -> Timestamp {
        self.now.get()
    }

    /// Move the clock forward by `secs`.
    pub fn advance(&self, secs: u64) {
        self.now.set(Timestamp::new(self.now.get().as_secs() + secs));
    }
}
