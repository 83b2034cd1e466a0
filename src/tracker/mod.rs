// ABOUTME: Tracker facade owning the user profile and its persistence
// ABOUTME: Entry point for all logging, progression, weight, and settings operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriQuest Project

//! # Tracker
//!
//! [`Tracker`] owns the [`UserProfile`] document explicitly; there is no
//! global state. Every mutating operation runs to completion synchronously
//! and is followed by a full write-through save. The embedding front end
//! constructs one tracker per user session and calls methods directly.

/// Append operations and daily aggregation queries
mod activity;
/// Streak computation over the meal log
mod streak;
/// Achievement catalog joins and grants
mod achievements;
/// Once-per-day bonus claims
mod bonus;

use chrono::NaiveDate;
use tracing::info;

use crate::clock::Clock;
use crate::config::catalog::RankTier;
use crate::config::{Catalog, TrackerFeatures};
use crate::models::{DailyGoals, UserProfile};
use crate::storage::ProfileStore;

/// Facade over the user-state document, its clock, and its storage
///
/// Generic over the storage backend and clock so tests can pin both.
pub struct Tracker<S: ProfileStore, C: Clock> {
    profile: UserProfile,
    store: S,
    clock: C,
    features: TrackerFeatures,
    catalog: Catalog,
}

impl<S: ProfileStore, C: Clock> Tracker<S, C> {
    /// Wrap an existing profile
    #[must_use]
    pub fn new(
        profile: UserProfile,
        store: S,
        clock: C,
        features: TrackerFeatures,
        catalog: Catalog,
    ) -> Self {
        Self {
            profile,
            store,
            clock,
            features,
            catalog,
        }
    }

    /// Load the persisted profile, or start from defaults when none exists
    pub fn open(store: S, clock: C, features: TrackerFeatures, catalog: Catalog) -> Self {
        let profile = store.load().map_or_else(
            || {
                info!("no persisted profile found, starting from defaults");
                UserProfile::default()
            },
            |profile| {
                info!(username = %profile.username, level = profile.level, "profile loaded");
                profile
            },
        );
        Self::new(profile, store, clock, features, catalog)
    }

    /// Read access to the owned profile
    #[must_use]
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// The catalogs this tracker renders from
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The deployment feature flags
    #[must_use]
    pub fn features(&self) -> TrackerFeatures {
        self.features
    }

    /// The rank tier the profile's points currently earn
    ///
    /// `None` only when the deployment supplied an empty rank table.
    #[must_use]
    pub fn current_rank(&self) -> Option<&RankTier> {
        self.catalog.ranks.rank_for(self.profile.rank_points)
    }

    /// Replace the daily nutrition goals
    pub fn set_goals(&mut self, goals: DailyGoals) {
        self.profile.goals = goals;
        info!(calories = goals.calories, "daily goals updated");
        self.persist();
    }

    /// Record a weight reading and update the target
    ///
    /// The reading lands in the weight log under today's date; a second
    /// reading the same day overwrites the first.
    pub fn update_weight(&mut self, current: f64, target: f64) {
        let today = self.clock.today();
        self.profile.current_weight = current;
        self.profile.target_weight = target;
        self.profile.weight_log.insert(today, current);
        info!(current, target, "weight updated");
        self.persist();
    }

    /// Most recent weight readings, newest first
    #[must_use]
    pub fn weight_history(&self, limit: usize) -> Vec<(NaiveDate, f64)> {
        self.profile
            .weight_log
            .iter()
            .rev()
            .take(limit)
            .map(|(date, weight)| (*date, *weight))
            .collect()
    }

    /// Replace the profile with a fresh default one
    pub fn reset(&mut self) {
        info!("resetting profile to defaults");
        self.profile = UserProfile::default();
        self.persist();
    }

    /// Explicitly persist the current profile, reporting success
    pub fn save(&self) -> bool {
        self.store.save(&self.profile)
    }

    /// Write-through after a mutation; failure is non-fatal and already
    /// logged by the store.
    fn persist(&self) {
        let _saved = self.store.save(&self.profile);
    }
}
