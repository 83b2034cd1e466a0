// ABOUTME: Shared helpers for integration tests
// ABOUTME: Builders for trackers pinned to a fixed clock and in-memory storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriQuest Project

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(dead_code)] // each integration test binary uses a subset of these helpers

use chrono::NaiveDate;
use nutriquest::clock::FixedClock;
use nutriquest::config::{Catalog, TrackerFeatures};
use nutriquest::storage::MemoryProfileStore;
use nutriquest::{Tracker, UserProfile};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn clock_at(y: i32, m: u32, d: u32) -> FixedClock {
    FixedClock::at_date(date(y, m, d))
}

/// Tracker on default everything, pinned to the given clock
pub fn tracker_at(clock: FixedClock) -> Tracker<MemoryProfileStore, FixedClock> {
    Tracker::open(
        MemoryProfileStore::new(),
        clock,
        TrackerFeatures::default(),
        Catalog::default(),
    )
}

/// Tracker wrapping a prepared profile, sharing the given store
pub fn tracker_with_profile(
    profile: UserProfile,
    store: MemoryProfileStore,
    clock: FixedClock,
) -> Tracker<MemoryProfileStore, FixedClock> {
    Tracker::new(
        profile,
        store,
        clock,
        TrackerFeatures::default(),
        Catalog::default(),
    )
}
