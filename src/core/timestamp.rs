//! Timestamps for the head of each log line
//!
//! The stamp is `[Y-M-D H:M:S]` in local wall-clock time with every field
//! unpadded and the month counted from zero (January is `0`).

use chrono::{Datelike, Local, NaiveDateTime, Timelike};
use std::fmt;

/// Source of wall-clock time
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Local time from the operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock frozen at a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Display adapter producing the line stamp for a point in time
#[derive(Debug, Clone, Copy)]
pub struct LineStamp(pub NaiveDateTime);

impl fmt::Display for LineStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = &self.0;
        write!(
            f,
            "[{}-{}-{} {}:{}:{}]",
            t.year(),
            t.month0(),
            t.day(),
            t.hour(),
            t.minute(),
            t.second()
        )
    }
}
