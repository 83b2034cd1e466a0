// ABOUTME: Progression engine converting experience awards into level-ups
// ABOUTME: Level threshold curve and rank-point grants over the user profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriQuest Project

//! # Progression Engine
//!
//! Experience accumulates toward a per-level threshold; crossing it levels
//! the user up and grants rank points. The rank label itself is derived
//! elsewhere (see [`crate::config::catalog::RankTable`]) from the points
//! this module maintains.

use tracing::debug;

use crate::constants::progression::{BASE_EXP_NEEDED, EXP_STEP_PER_LEVEL, RANK_POINTS_PER_LEVEL};
use crate::models::UserProfile;

/// Experience required to complete the given level
///
/// Strictly increasing in `level`: 100 at level 1, then +50 per level.
#[must_use]
pub const fn exp_needed(level: u32) -> u32 {
    BASE_EXP_NEEDED + level.saturating_sub(1) * EXP_STEP_PER_LEVEL
}

/// Add experience to the profile, applying any level-ups it triggers
///
/// A single award can cross several level thresholds (a large bonus), so
/// level-ups apply in a loop: each one consumes the current threshold,
/// increments the level, and grants [`RANK_POINTS_PER_LEVEL`] rank points.
/// On return `0 <= experience < exp_needed(level)` holds again.
///
/// A zero award is a no-op returning `false`; negative awards are
/// unrepresentable by the parameter type.
///
/// Returns whether at least one level-up occurred, for UI celebration only.
pub fn award_experience(profile: &mut UserProfile, amount: u32) -> bool {
    if amount == 0 {
        return false;
    }

    profile.experience = profile.experience.saturating_add(amount);

    let mut leveled_up = false;
    while profile.experience >= exp_needed(profile.level) {
        profile.experience -= exp_needed(profile.level);
        profile.level += 1;
        profile.rank_points = profile.rank_points.saturating_add(RANK_POINTS_PER_LEVEL);
        leveled_up = true;
    }

    if leveled_up {
        debug!(
            level = profile.level,
            rank_points = profile.rank_points,
            "level up"
        );
    }

    leveled_up
}
