//! Source of the current date and time
//!
//! The scaffold pipeline never calls `Local::now()` itself; it asks a [`Clock`]
//! so tests can pin the date.

use chrono::{DateTime, Local};

/// Provides the invocation time
pub trait Clock {
    /// Current local date and time
    fn now(&self) -> DateTime<Local>;
}

/// Reads the system clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Always returns the same instant
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}
