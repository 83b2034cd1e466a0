// ABOUTME: Core data model for the tracking document
// ABOUTME: UserProfile root aggregate, per-day entry types, and aggregation rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriQuest Project

//! # Data Model
//!
//! [`UserProfile`] is the single root aggregate: one document per user,
//! serialized in full after every mutation. Per-day collections are ordered
//! maps keyed by calendar date (`YYYY-MM-DD` on the wire) so serialization is
//! deterministic and round-trips losslessly.
//!
//! Entries are immutable once appended; a correction is another entry.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::defaults;
use crate::progression;

/// A logged meal with its macro breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealEntry {
    /// Food or meal name as entered
    pub name: String,
    /// Calories consumed
    pub calories: f64,
    /// Protein in grams
    pub protein_g: f64,
    /// Carbohydrates in grams
    pub carbs_g: f64,
    /// Fat in grams
    pub fat_g: f64,
    /// Wall-clock time of day the entry was logged (`HH:MM`)
    pub time: String,
}

/// A logged workout session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutEntry {
    /// Workout name as entered
    pub name: String,
    /// Estimated calories burned
    pub calories_burned: f64,
    /// Wall-clock time of day the entry was logged (`HH:MM`)
    pub time: String,
}

/// A logged water intake
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterEntry {
    /// Amount in milliliters
    pub amount_ml: u32,
    /// Wall-clock time of day the entry was logged (`HH:MM`)
    pub time: String,
}

/// Daily nutrition targets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyGoals {
    /// Daily calorie goal
    pub calories: f64,
    /// Daily protein goal in grams
    pub protein_g: f64,
    /// Daily carbohydrate goal in grams
    pub carbs_g: f64,
    /// Daily fat goal in grams
    pub fat_g: f64,
    /// Daily water goal in milliliters
    pub water_ml: u32,
}

impl Default for DailyGoals {
    fn default() -> Self {
        Self {
            calories: defaults::CALORIE_GOAL,
            protein_g: defaults::PROTEIN_GOAL_G,
            carbs_g: defaults::CARBS_GOAL_G,
            fat_g: defaults::FAT_GOAL_G,
            water_ml: defaults::WATER_GOAL_ML,
        }
    }
}

/// Field-wise macro sums over a set of meal entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTotals {
    /// Total calories consumed
    pub calories: f64,
    /// Total protein in grams
    pub protein_g: f64,
    /// Total carbohydrates in grams
    pub carbs_g: f64,
    /// Total fat in grams
    pub fat_g: f64,
}

impl MacroTotals {
    /// Accumulate one meal entry into the running totals
    pub fn add(&mut self, meal: &MealEntry) {
        self.calories += meal.calories;
        self.protein_g += meal.protein_g;
        self.carbs_g += meal.carbs_g;
        self.fat_g += meal.fat_g;
    }
}

/// One row of the last-N-days summary table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    /// The calendar day this row covers
    pub date: NaiveDate,
    /// Consumed macro totals for the day
    pub totals: MacroTotals,
    /// Calories burned via workouts
    pub calories_burned: f64,
    /// Consumed minus burned calories
    pub net_calories: f64,
    /// Water intake in milliliters
    pub water_ml: u32,
    /// Number of meal entries
    pub meal_count: usize,
    /// Number of workout entries
    pub workout_count: usize,
    /// Number of water entries
    pub water_count: usize,
}

/// Progress toward the daily goals, as the dashboard renders it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// Calories consumed as a percentage of the calorie goal
    pub calories_pct: f64,
    /// Protein consumed as a percentage of the protein goal
    pub protein_pct: f64,
    /// Carbs consumed as a percentage of the carbs goal
    pub carbs_pct: f64,
    /// Fat consumed as a percentage of the fat goal
    pub fat_pct: f64,
    /// Water consumed as a percentage of the water goal
    pub water_pct: f64,
    /// Calories still available today, clamped at zero
    pub remaining_calories: f64,
    /// Signed goal minus consumed; negative once over goal
    pub calorie_balance: f64,
    /// Whether consumption exceeded the calorie goal
    pub over_goal: bool,
}

/// The full per-user tracking document
///
/// Created once with default values when no persisted document exists,
/// mutated in place by every logging/goal/weight/bonus action, and written
/// through to storage after each mutation.
///
/// `exp_needed` and the rank label are pure functions of `level` and
/// `rank_points` respectively and are intentionally not stored, so they can
/// never desynchronize from the counters they derive from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique profile identifier
    pub id: Uuid,
    /// Display name
    pub username: String,
    /// Current level, starting at 1
    pub level: u32,
    /// Experience accumulated toward the next level
    pub experience: u32,
    /// Cumulative rank points; the rank label derives from these
    pub rank_points: u32,
    /// Daily nutrition targets
    pub goals: DailyGoals,
    /// Most recently recorded weight
    pub current_weight: f64,
    /// Weight the user is working toward
    pub target_weight: f64,
    /// Meals by calendar date, in append order
    pub meals: BTreeMap<NaiveDate, Vec<MealEntry>>,
    /// Workouts by calendar date, in append order
    pub workouts: BTreeMap<NaiveDate, Vec<WorkoutEntry>>,
    /// Water intake by calendar date, in append order
    pub water_intake: BTreeMap<NaiveDate, Vec<WaterEntry>>,
    /// One weight reading per calendar date
    pub weight_log: BTreeMap<NaiveDate, f64>,
    /// Earned achievement identifiers
    pub achievements: BTreeSet<String>,
    /// Lifetime meal entry count, kept in lockstep with `meals`
    pub total_meals_logged: u64,
    /// Lifetime workout entry count, kept in lockstep with `workouts`
    pub total_workouts: u64,
    /// Lifetime water entry count, kept in lockstep with `water_intake`
    pub total_water_logged: u64,
    /// Longest meal streak ever observed
    pub best_streak: u32,
    /// Date the daily bonus was last claimed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_bonus_date: Option<NaiveDate>,
    /// When this profile was created
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    /// Create a fresh profile with default goals and counters
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            level: 1,
            experience: 0,
            rank_points: 0,
            goals: DailyGoals::default(),
            current_weight: defaults::CURRENT_WEIGHT,
            target_weight: defaults::TARGET_WEIGHT,
            meals: BTreeMap::new(),
            workouts: BTreeMap::new(),
            water_intake: BTreeMap::new(),
            weight_log: BTreeMap::new(),
            achievements: BTreeSet::new(),
            total_meals_logged: 0,
            total_workouts: 0,
            total_water_logged: 0,
            best_streak: 0,
            last_bonus_date: None,
            created_at: Utc::now(),
        }
    }

    /// Experience required to reach the next level from the current one
    #[must_use]
    pub const fn exp_needed(&self) -> u32 {
        progression::exp_needed(self.level)
    }

    /// Fraction of the way to the next level, in `0.0..1.0`
    #[must_use]
    pub fn exp_progress(&self) -> f64 {
        f64::from(self.experience) / f64::from(self.exp_needed())
    }

    /// Whether the given day has at least one meal entry
    ///
    /// A date with a present but empty entry list counts the same as an
    /// absent date.
    #[must_use]
    pub fn has_meals_on(&self, date: NaiveDate) -> bool {
        self.meals.get(&date).is_some_and(|entries| !entries.is_empty())
    }

    /// Difference between current and target weight (positive while above target)
    #[must_use]
    pub fn weight_to_go(&self) -> f64 {
        self.current_weight - self.target_weight
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::new(defaults::USERNAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_invariants() {
        let profile = UserProfile::default();
        assert_eq!(profile.level, 1);
        assert_eq!(profile.experience, 0);
        assert_eq!(profile.exp_needed(), 100);
        assert!(profile.meals.is_empty());
        assert_eq!(profile.username, defaults::USERNAME);
    }

    #[test]
    fn test_has_meals_on_treats_empty_as_absent() {
        let mut profile = UserProfile::default();
        let day = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert!(!profile.has_meals_on(day));

        profile.meals.insert(day, Vec::new());
        assert!(!profile.has_meals_on(day));

        profile.meals.get_mut(&day).unwrap().push(MealEntry {
            name: "Oatmeal".into(),
            calories: 150.0,
            protein_g: 5.0,
            carbs_g: 27.0,
            fat_g: 3.0,
            time: "08:00".into(),
        });
        assert!(profile.has_meals_on(day));
    }

    #[test]
    fn test_macro_totals_accumulate() {
        let mut totals = MacroTotals::default();
        totals.add(&MealEntry {
            name: "Eggs".into(),
            calories: 155.0,
            protein_g: 13.0,
            carbs_g: 1.0,
            fat_g: 11.0,
            time: "08:00".into(),
        });
        totals.add(&MealEntry {
            name: "Banana".into(),
            calories: 105.0,
            protein_g: 1.0,
            carbs_g: 27.0,
            fat_g: 0.0,
            time: "10:30".into(),
        });
        assert!((totals.calories - 260.0).abs() < f64::EPSILON);
        assert!((totals.protein_g - 14.0).abs() < f64::EPSILON);
        assert!((totals.carbs_g - 28.0).abs() < f64::EPSILON);
    }
}
