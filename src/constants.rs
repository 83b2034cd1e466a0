// ABOUTME: System-wide constants for the NutriQuest tracking core
// ABOUTME: XP awards, progression curve, streak horizon, defaults, and env keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriQuest Project

//! # Constants Module
//!
//! Fixed tuning values for the gamification layer plus the default profile
//! values used when no persisted document exists. Environment variable names
//! live in [`env_keys`]; parsing them is the job of
//! [`crate::config::environment`].

/// Experience awards for user actions
pub mod xp {
    /// Experience granted for logging a meal
    pub const MEAL: u32 = 10;
    /// Experience granted for logging a workout
    pub const WORKOUT: u32 = 15;
    /// Experience granted for logging water intake
    pub const WATER: u32 = 5;
    /// Experience granted for the once-per-day bonus claim
    pub const DAILY_BONUS: u32 = 25;
}

/// Level progression curve
pub mod progression {
    /// Experience needed to leave level 1
    pub const BASE_EXP_NEEDED: u32 = 100;
    /// Additional experience needed per level beyond the first
    pub const EXP_STEP_PER_LEVEL: u32 = 50;
    /// Rank points granted on each level-up
    pub const RANK_POINTS_PER_LEVEL: u32 = 20;
}

/// Streak computation bounds
pub mod streak {
    /// Maximum number of days the backward streak scan inspects.
    ///
    /// A streak longer than this is undercounted rather than scanned
    /// unboundedly; known limitation.
    pub const SCAN_HORIZON_DAYS: u32 = 100;
}

/// Default profile values for a fresh install
pub mod defaults {
    /// Display name assigned before the user picks one
    pub const USERNAME: &str = "Nutritionist";
    /// Daily calorie goal
    pub const CALORIE_GOAL: f64 = 2000.0;
    /// Daily protein goal in grams
    pub const PROTEIN_GOAL_G: f64 = 150.0;
    /// Daily carbohydrate goal in grams
    pub const CARBS_GOAL_G: f64 = 225.0;
    /// Daily fat goal in grams
    pub const FAT_GOAL_G: f64 = 65.0;
    /// Daily water goal in milliliters
    pub const WATER_GOAL_ML: u32 = 2000;
    /// Starting current weight
    pub const CURRENT_WEIGHT: f64 = 180.0;
    /// Starting target weight
    pub const TARGET_WEIGHT: f64 = 170.0;
}

/// Persisted document layout
pub mod storage {
    /// Directory name created under the platform data dir when no override is set
    pub const DEFAULT_DIR_NAME: &str = "nutriquest";
    /// File name of the persisted profile document
    pub const PROFILE_FILE: &str = "tracker.json";
}

/// Environment variable names read by [`crate::config::environment`]
pub mod env_keys {
    /// Overrides the data directory the profile document is stored in
    pub const DATA_DIR: &str = "NUTRIQUEST_DATA_DIR";
    /// Weight unit for this deployment: `lbs` or `kg`
    pub const WEIGHT_UNIT: &str = "NUTRIQUEST_WEIGHT_UNIT";
    /// Enables or disables workout tracking: `true`/`false`
    pub const FEATURE_WORKOUTS: &str = "NUTRIQUEST_FEATURE_WORKOUTS";
    /// Enables or disables water tracking: `true`/`false`
    pub const FEATURE_WATER: &str = "NUTRIQUEST_FEATURE_WATER";
}
