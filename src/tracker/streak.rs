// ABOUTME: Meal streak computation over the per-day activity log
// ABOUTME: Backward scan from today with a fixed horizon; maintains best_streak
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriQuest Project

//! Streak evaluation
//!
//! A streak is the number of consecutive calendar days ending today with at
//! least one meal entry. A day whose key is absent and a day holding an
//! empty entry list both terminate the walk.

use chrono::Days;
use tracing::debug;

use super::Tracker;
use crate::clock::Clock;
use crate::constants::streak::SCAN_HORIZON_DAYS;
use crate::storage::ProfileStore;

impl<S: ProfileStore, C: Clock> Tracker<S, C> {
    /// Count consecutive days with meals, walking backward from today
    ///
    /// The scan stops at [`SCAN_HORIZON_DAYS`]; an unbroken streak longer
    /// than the horizon is undercounted rather than scanned unboundedly.
    ///
    /// Not pure: every computation raises `best_streak` to the maximum ever
    /// observed — this read is the only path that updates it.
    pub fn current_meal_streak(&mut self) -> u32 {
        let today = self.clock.today();
        let mut streak = 0;

        for offset in 0..SCAN_HORIZON_DAYS {
            let Some(date) = today.checked_sub_days(Days::new(u64::from(offset))) else {
                break;
            };
            if !self.profile.has_meals_on(date) {
                break;
            }
            streak += 1;
        }

        if streak > self.profile.best_streak {
            debug!(streak, "new best streak");
            self.profile.best_streak = streak;
            self.persist();
        }
        streak
    }
}
