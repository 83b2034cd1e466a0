// ABOUTME: Achievement grants and catalog joins over the earned-id set
// ABOUTME: The earned set is authoritative; unknown catalog ids are skipped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriQuest Project

//! Achievement storage
//!
//! The core stores earned achievement ids and joins them against the
//! catalog for display. Unlock-condition evaluation is deliberately not
//! implemented here: callers decide when an achievement is earned and call
//! [`Tracker::grant_achievement`].

use tracing::info;

use super::Tracker;
use crate::clock::Clock;
use crate::config::catalog::AchievementDef;
use crate::storage::ProfileStore;

impl<S: ProfileStore, C: Clock> Tracker<S, C> {
    /// Record an achievement as earned
    ///
    /// Idempotent: returns `true` only when the id was newly added. Ids the
    /// catalog does not (yet) define are accepted — the earned set is
    /// authoritative and catalogs evolve independently.
    pub fn grant_achievement(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        let newly_earned = self.profile.achievements.insert(id.clone());
        if newly_earned {
            info!(achievement = %id, "achievement earned");
            self.persist();
        }
        newly_earned
    }

    /// Whether the given achievement has been earned
    #[must_use]
    pub fn has_achievement(&self, id: &str) -> bool {
        self.profile.achievements.contains(id)
    }

    /// Display metadata for every earned achievement
    ///
    /// Earned ids missing from the catalog are skipped silently.
    #[must_use]
    pub fn earned_achievements(&self) -> Vec<&AchievementDef> {
        self.profile
            .achievements
            .iter()
            .filter_map(|id| self.catalog.achievements.get(id))
            .collect()
    }

    /// Catalog achievements not yet earned, in catalog order
    #[must_use]
    pub fn locked_achievements(&self) -> Vec<&AchievementDef> {
        self.catalog
            .achievements
            .entries
            .iter()
            .filter(|def| !self.profile.achievements.contains(&def.id))
            .collect()
    }
}
