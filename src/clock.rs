// ABOUTME: Injectable clock abstraction for date and time-of-day lookups
// ABOUTME: SystemClock for production, FixedClock for deterministic tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriQuest Project

//! Clock abstraction
//!
//! Everything date-sensitive in the core (date keys, streaks, daily bonus)
//! goes through [`Clock`] instead of the wall clock directly, so tests can
//! pin "today" and step it forward across simulated days.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Source of the current local date and time-of-day
pub trait Clock {
    /// Current local calendar date
    fn today(&self) -> NaiveDate;

    /// Current local time of day
    fn time_of_day(&self) -> NaiveTime;

    /// Wall-clock time formatted the way log entries store it (`HH:MM`)
    fn time_stamp(&self) -> String {
        self.time_of_day().format("%H:%M").to_string()
    }
}

/// Production clock backed by the local system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn time_of_day(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// Settable clock for tests and simulations
///
/// Clones share the same underlying instant, so a test can hold one handle
/// while the tracker owns another and advance both at once.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Arc<Mutex<NaiveDateTime>>,
}

impl FixedClock {
    /// Create a clock pinned to the given instant
    #[must_use]
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    /// Create a clock pinned to midnight of the given date
    #[must_use]
    pub fn at_date(date: NaiveDate) -> Self {
        Self::new(date.and_time(NaiveTime::MIN))
    }

    /// Re-pin the clock to a new instant
    pub fn set(&self, now: NaiveDateTime) {
        *self.lock() = now;
    }

    /// Advance the clock by whole days, keeping the time of day
    pub fn advance_days(&self, days: i64) {
        let mut now = self.lock();
        *now += chrono::Duration::days(days);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, NaiveDateTime> {
        self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.lock().date()
    }

    fn time_of_day(&self) -> NaiveTime {
        self.lock().time()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_fixed_clock_advances() {
        let clock = FixedClock::at_date(date(2025, 3, 1));
        assert_eq!(clock.today(), date(2025, 3, 1));

        clock.advance_days(2);
        assert_eq!(clock.today(), date(2025, 3, 3));
    }

    #[test]
    fn test_clones_share_state() {
        let clock = FixedClock::at_date(date(2025, 3, 1));
        let handle = clock.clone();
        handle.advance_days(1);
        assert_eq!(clock.today(), date(2025, 3, 2));
    }

    #[test]
    fn test_time_stamp_format() {
        let clock = FixedClock::new(
            date(2025, 3, 1).and_time(NaiveTime::from_hms_opt(7, 5, 0).unwrap()),
        );
        assert_eq!(clock.time_stamp(), "07:05");
    }
}
