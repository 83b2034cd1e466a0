// ABOUTME: Append-only activity log operations and daily aggregation queries
// ABOUTME: Meal/workout/water logging, totals, net calories, and summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriQuest Project

//! Activity logging and aggregation
//!
//! The three append operations are symmetric: timestamp an entry under
//! today's date key, bump the lifetime counter, award the fixed XP, persist.
//! Numeric inputs arrive pre-validated from the boundary; the core stores
//! what it is given.
//!
//! All aggregation queries are pure reads over the per-date collections.

use chrono::{Days, NaiveDate};
use tracing::info;

use super::Tracker;
use crate::clock::Clock;
use crate::constants::xp;
use crate::errors::{AppError, AppResult};
use crate::models::{
    DailySummary, GoalProgress, MacroTotals, MealEntry, WaterEntry, WorkoutEntry,
};
use crate::progression;
use crate::storage::ProfileStore;

impl<S: ProfileStore, C: Clock> Tracker<S, C> {
    /// Log a meal under today's date
    ///
    /// Returns whether the XP award leveled the user up.
    ///
    /// # Errors
    /// Never fails today; the `Result` keeps the logging surface uniform.
    pub fn log_meal(
        &mut self,
        name: impl Into<String>,
        calories: f64,
        protein_g: f64,
        carbs_g: f64,
        fat_g: f64,
    ) -> AppResult<bool> {
        let date = self.clock.today();
        let entry = MealEntry {
            name: name.into(),
            calories,
            protein_g,
            carbs_g,
            fat_g,
            time: self.clock.time_stamp(),
        };
        info!(name = %entry.name, calories, date = %date, "meal logged");
        self.profile.meals.entry(date).or_default().push(entry);
        self.profile.total_meals_logged += 1;
        let leveled_up = progression::award_experience(&mut self.profile, xp::MEAL);
        self.persist();
        Ok(leveled_up)
    }

    /// Log a workout under today's date
    ///
    /// Returns whether the XP award leveled the user up.
    ///
    /// # Errors
    /// Returns `FeatureDisabled` when this deployment has workout tracking
    /// turned off.
    pub fn log_workout(
        &mut self,
        name: impl Into<String>,
        calories_burned: f64,
    ) -> AppResult<bool> {
        if !self.features.workouts {
            return Err(AppError::feature_disabled("workout"));
        }
        let date = self.clock.today();
        let entry = WorkoutEntry {
            name: name.into(),
            calories_burned,
            time: self.clock.time_stamp(),
        };
        info!(name = %entry.name, calories_burned, date = %date, "workout logged");
        self.profile.workouts.entry(date).or_default().push(entry);
        self.profile.total_workouts += 1;
        let leveled_up = progression::award_experience(&mut self.profile, xp::WORKOUT);
        self.persist();
        Ok(leveled_up)
    }

    /// Log a water intake under today's date
    ///
    /// Returns whether the XP award leveled the user up.
    ///
    /// # Errors
    /// Returns `FeatureDisabled` when this deployment has water tracking
    /// turned off.
    pub fn log_water(&mut self, amount_ml: u32) -> AppResult<bool> {
        if !self.features.water {
            return Err(AppError::feature_disabled("water"));
        }
        let date = self.clock.today();
        let entry = WaterEntry {
            amount_ml,
            time: self.clock.time_stamp(),
        };
        info!(amount_ml, date = %date, "water logged");
        self.profile.water_intake.entry(date).or_default().push(entry);
        self.profile.total_water_logged += 1;
        let leveled_up = progression::award_experience(&mut self.profile, xp::WATER);
        self.persist();
        Ok(leveled_up)
    }

    /// Field-wise macro sums over the given day's meals
    ///
    /// Zero-valued when the day has no entries.
    #[must_use]
    pub fn totals_for_date(&self, date: NaiveDate) -> MacroTotals {
        let mut totals = MacroTotals::default();
        if let Some(meals) = self.profile.meals.get(&date) {
            for meal in meals {
                totals.add(meal);
            }
        }
        totals
    }

    /// Calories burned via workouts on the given day
    #[must_use]
    pub fn burned_for_date(&self, date: NaiveDate) -> f64 {
        self.profile
            .workouts
            .get(&date)
            .map_or(0.0, |entries| {
                entries.iter().map(|entry| entry.calories_burned).sum()
            })
    }

    /// Consumed minus burned calories for the given day
    #[must_use]
    pub fn net_calories(&self, date: NaiveDate) -> f64 {
        self.totals_for_date(date).calories - self.burned_for_date(date)
    }

    /// Water intake in milliliters on the given day
    #[must_use]
    pub fn water_for_date(&self, date: NaiveDate) -> u32 {
        self.profile
            .water_intake
            .get(&date)
            .map_or(0, |entries| entries.iter().map(|entry| entry.amount_ml).sum())
    }

    /// Progress toward the daily goals on the given day
    #[must_use]
    pub fn goal_progress(&self, date: NaiveDate) -> GoalProgress {
        let goals = self.profile.goals;
        let totals = self.totals_for_date(date);
        let water_ml = self.water_for_date(date);

        GoalProgress {
            calories_pct: percentage(totals.calories, goals.calories),
            protein_pct: percentage(totals.protein_g, goals.protein_g),
            carbs_pct: percentage(totals.carbs_g, goals.carbs_g),
            fat_pct: percentage(totals.fat_g, goals.fat_g),
            water_pct: percentage(f64::from(water_ml), f64::from(goals.water_ml)),
            remaining_calories: (goals.calories - totals.calories).max(0.0),
            calorie_balance: goals.calories - totals.calories,
            over_goal: totals.calories > goals.calories,
        }
    }

    /// One summary row per day for the most recent `n` days ending today
    ///
    /// Rows come back in chronological order, oldest first, zero-filled for
    /// days with no data.
    #[must_use]
    pub fn last_n_days_summary(&self, n: usize) -> Vec<DailySummary> {
        let today = self.clock.today();
        (0..n)
            .rev()
            .filter_map(|offset| today.checked_sub_days(Days::new(offset as u64)))
            .map(|date| self.summary_for_date(date))
            .collect()
    }

    /// The full summary row for one day
    #[must_use]
    pub fn summary_for_date(&self, date: NaiveDate) -> DailySummary {
        let totals = self.totals_for_date(date);
        let calories_burned = self.burned_for_date(date);
        DailySummary {
            date,
            totals,
            calories_burned,
            net_calories: totals.calories - calories_burned,
            water_ml: self.water_for_date(date),
            meal_count: self.profile.meals.get(&date).map_or(0, Vec::len),
            workout_count: self.profile.workouts.get(&date).map_or(0, Vec::len),
            water_count: self.profile.water_intake.get(&date).map_or(0, Vec::len),
        }
    }

    /// Number of distinct days with at least one meal entry
    #[must_use]
    pub fn days_logged(&self) -> usize {
        self.profile
            .meals
            .values()
            .filter(|entries| !entries.is_empty())
            .count()
    }
}

/// Consumed over goal as a percentage; zero when the goal is unset
fn percentage(consumed: f64, goal: f64) -> f64 {
    if goal > 0.0 {
        consumed / goal * 100.0
    } else {
        0.0
    }
}
