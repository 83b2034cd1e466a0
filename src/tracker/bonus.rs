// ABOUTME: Daily bonus claims, one award per calendar day
// ABOUTME: Idempotent no-op on repeat claims the same day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriQuest Project

//! Daily bonus

use tracing::info;

use super::Tracker;
use crate::clock::Clock;
use crate::constants::xp;
use crate::progression;
use crate::storage::ProfileStore;

impl<S: ProfileStore, C: Clock> Tracker<S, C> {
    /// Whether the daily bonus can still be claimed today
    #[must_use]
    pub fn bonus_available_today(&self) -> bool {
        self.profile.last_bonus_date != Some(self.clock.today())
    }

    /// Claim the once-per-day bonus
    ///
    /// Awards the bonus XP and stamps today as claimed. Returns `false`
    /// without any award when today's bonus was already taken.
    pub fn claim_daily_bonus(&mut self) -> bool {
        let today = self.clock.today();
        if self.profile.last_bonus_date == Some(today) {
            return false;
        }

        progression::award_experience(&mut self.profile, xp::DAILY_BONUS);
        self.profile.last_bonus_date = Some(today);
        info!(date = %today, "daily bonus claimed");
        self.persist();
        true
    }
}
