//! Sources of the current instant.
//!
//! Grid builders never read a clock; hosts call [`Clock::now`] and pass the
//! result in as `today`/`now`.
use std::time::{SystemTime, UNIX_EPOCH};

use crate::{date::CalendarDate, instant::Instant, time::TimeOfDay};

/// Provides the current wall-clock instant.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> Instant;

    /// Returns the current date.
    fn today(&self) -> CalendarDate {
        self.now().date()
    }
}

/// The system clock, read as UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        let secs = duration.as_secs();
        let date = CalendarDate::from_days_since_epoch((secs / 86_400) as i64);
        let time = TimeOfDay::new_unchecked(
            ((secs / 3_600) % 24) as u8,
            ((secs / 60) % 60) as u8,
            (secs % 60) as u8,
        );
        Instant::from_parts(date, time)
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Instant);

impl Clock for FixedClock {
    fn now(&self) -> Instant {
        self.0
    }
}
