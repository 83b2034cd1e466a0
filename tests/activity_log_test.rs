// ABOUTME: Integration tests for activity logging and daily aggregation queries
// ABOUTME: Totals, net calories, water sums, goal percentages, and summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriQuest Project

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{clock_at, date, tracker_at};
use nutriquest::clock::FixedClock;
use nutriquest::config::{Catalog, TrackerFeatures};
use nutriquest::storage::MemoryProfileStore;
use nutriquest::{ErrorCode, Tracker};

#[test]
fn test_three_meals_sum_field_wise() {
    let mut tracker = tracker_at(clock_at(2025, 3, 10));

    tracker.log_meal("Eggs (2)", 155.0, 13.0, 1.0, 11.0).unwrap();
    tracker.log_meal("Rice (1 cup)", 206.0, 4.0, 45.0, 0.0).unwrap();
    tracker.log_meal("Salmon (100g)", 206.0, 22.0, 0.0, 13.0).unwrap();

    let totals = tracker.totals_for_date(date(2025, 3, 10));
    assert!((totals.calories - 567.0).abs() < f64::EPSILON);
    assert!((totals.protein_g - 39.0).abs() < f64::EPSILON);
    assert!((totals.carbs_g - 46.0).abs() < f64::EPSILON);
    assert!((totals.fat_g - 24.0).abs() < f64::EPSILON);
    assert_eq!(tracker.profile().total_meals_logged, 3);
}

#[test]
fn test_totals_for_empty_date_are_zero() {
    let tracker = tracker_at(clock_at(2025, 3, 10));
    let totals = tracker.totals_for_date(date(2025, 3, 10));
    assert!(totals.calories.abs() < f64::EPSILON);
    assert!(totals.protein_g.abs() < f64::EPSILON);
}

#[test]
fn test_net_calories_subtracts_burned() {
    let mut tracker = tracker_at(clock_at(2025, 3, 10));

    tracker.log_meal("Big Meal", 2000.0, 80.0, 200.0, 70.0).unwrap();
    tracker.log_workout("Running (30 min)", 300.0).unwrap();

    assert!((tracker.net_calories(date(2025, 3, 10)) - 1700.0).abs() < f64::EPSILON);
    assert!((tracker.burned_for_date(date(2025, 3, 10)) - 300.0).abs() < f64::EPSILON);
}

#[test]
fn test_water_sums_for_day() {
    let mut tracker = tracker_at(clock_at(2025, 3, 10));

    tracker.log_water(250).unwrap();
    tracker.log_water(500).unwrap();

    assert_eq!(tracker.water_for_date(date(2025, 3, 10)), 750);
    assert_eq!(tracker.water_for_date(date(2025, 3, 9)), 0);
    assert_eq!(tracker.profile().total_water_logged, 2);
}

#[test]
fn test_counters_track_each_collection() {
    let mut tracker = tracker_at(clock_at(2025, 3, 10));

    tracker.log_meal("Apple", 95.0, 0.0, 25.0, 0.0).unwrap();
    tracker.log_workout("Yoga (30 min)", 120.0).unwrap();
    tracker.log_workout("Walking (30 min)", 150.0).unwrap();
    tracker.log_water(200).unwrap();

    let profile = tracker.profile();
    assert_eq!(profile.total_meals_logged, 1);
    assert_eq!(profile.total_workouts, 2);
    assert_eq!(profile.total_water_logged, 1);
    // XP: 10 + 15 + 15 + 5
    assert_eq!(profile.experience, 45);
}

#[test]
fn test_summary_with_no_data_is_seven_zero_rows() {
    let tracker = tracker_at(clock_at(2025, 3, 10));

    let rows = tracker.last_n_days_summary(7);
    assert_eq!(rows.len(), 7);
    assert_eq!(rows[0].date, date(2025, 3, 4));
    assert_eq!(rows[6].date, date(2025, 3, 10));

    for row in &rows {
        assert!(row.totals.calories.abs() < f64::EPSILON);
        assert!(row.net_calories.abs() < f64::EPSILON);
        assert_eq!(row.water_ml, 0);
        assert_eq!(row.meal_count, 0);
        assert_eq!(row.workout_count, 0);
        assert_eq!(row.water_count, 0);
    }
}

#[test]
fn test_summary_rows_are_chronological_and_zero_filled() {
    let clock = clock_at(2025, 3, 8);
    let mut tracker = tracker_at(clock.clone());

    tracker.log_meal("Oatmeal (1 cup)", 150.0, 5.0, 27.0, 3.0).unwrap();
    tracker.log_meal("Banana", 105.0, 1.0, 27.0, 0.0).unwrap();

    clock.advance_days(1); // 2025-03-09: workout and water only
    tracker.log_workout("Cycling (30 min)", 250.0).unwrap();
    tracker.log_water(500).unwrap();

    clock.advance_days(1); // 2025-03-10
    tracker.log_meal("Pizza (1 slice)", 285.0, 12.0, 36.0, 10.0).unwrap();

    let rows = tracker.last_n_days_summary(4);
    assert_eq!(rows.len(), 4);

    // 03-07: nothing logged
    assert_eq!(rows[0].date, date(2025, 3, 7));
    assert_eq!(rows[0].meal_count, 0);

    // 03-08: two meals
    assert_eq!(rows[1].date, date(2025, 3, 8));
    assert_eq!(rows[1].meal_count, 2);
    assert!((rows[1].totals.calories - 255.0).abs() < f64::EPSILON);

    // 03-09: burned only, so net is negative
    assert_eq!(rows[2].date, date(2025, 3, 9));
    assert_eq!(rows[2].workout_count, 1);
    assert_eq!(rows[2].water_ml, 500);
    assert!((rows[2].net_calories - (-250.0)).abs() < f64::EPSILON);

    // 03-10: one meal
    assert_eq!(rows[3].date, date(2025, 3, 10));
    assert_eq!(rows[3].meal_count, 1);
}

#[test]
fn test_goal_progress_percentages() {
    let mut tracker = tracker_at(clock_at(2025, 3, 10));

    // Defaults: 2000 cal, 150 g protein, 225 g carbs, 65 g fat, 2000 ml water
    tracker.log_meal("Half Day", 1000.0, 75.0, 45.0, 13.0).unwrap();
    tracker.log_water(500).unwrap();

    let progress = tracker.goal_progress(date(2025, 3, 10));
    assert!((progress.calories_pct - 50.0).abs() < f64::EPSILON);
    assert!((progress.protein_pct - 50.0).abs() < f64::EPSILON);
    assert!((progress.carbs_pct - 20.0).abs() < f64::EPSILON);
    assert!((progress.fat_pct - 20.0).abs() < f64::EPSILON);
    assert!((progress.water_pct - 25.0).abs() < f64::EPSILON);
    assert!((progress.remaining_calories - 1000.0).abs() < f64::EPSILON);
    assert!(!progress.over_goal);
}

#[test]
fn test_goal_progress_clamps_remaining_when_over() {
    let mut tracker = tracker_at(clock_at(2025, 3, 10));

    tracker.log_meal("Feast", 2500.0, 90.0, 250.0, 100.0).unwrap();

    let progress = tracker.goal_progress(date(2025, 3, 10));
    assert!(progress.over_goal);
    assert!(progress.remaining_calories.abs() < f64::EPSILON);
    assert!((progress.calorie_balance - (-500.0)).abs() < f64::EPSILON);
}

#[test]
fn test_days_logged_ignores_empty_days() {
    let clock = clock_at(2025, 3, 1);
    let mut tracker = tracker_at(clock.clone());

    tracker.log_meal("Apple", 95.0, 0.0, 25.0, 0.0).unwrap();
    clock.advance_days(3);
    tracker.log_meal("Apple", 95.0, 0.0, 25.0, 0.0).unwrap();

    assert_eq!(tracker.days_logged(), 2);
}

#[test]
fn test_disabled_features_reject_logging() {
    let features = TrackerFeatures {
        workouts: false,
        water: false,
    };
    let mut tracker = Tracker::open(
        MemoryProfileStore::new(),
        clock_at(2025, 3, 10),
        features,
        Catalog::default(),
    );

    let workout_err = tracker.log_workout("Running (30 min)", 300.0).unwrap_err();
    assert_eq!(workout_err.code, ErrorCode::FeatureDisabled);

    let water_err = tracker.log_water(250).unwrap_err();
    assert_eq!(water_err.code, ErrorCode::FeatureDisabled);

    // Meals are never gated
    tracker.log_meal("Apple", 95.0, 0.0, 25.0, 0.0).unwrap();
    assert_eq!(tracker.profile().total_meals_logged, 1);
    assert_eq!(tracker.profile().total_workouts, 0);
}

#[test]
fn test_entries_carry_time_of_day() {
    let clock = FixedClock::new(
        date(2025, 3, 10).and_hms_opt(13, 45, 0).unwrap(),
    );
    let mut tracker = Tracker::open(
        MemoryProfileStore::new(),
        clock,
        TrackerFeatures::default(),
        Catalog::default(),
    );

    tracker.log_meal("Salad (avg)", 150.0, 5.0, 12.0, 8.0).unwrap();

    let meals = &tracker.profile().meals[&date(2025, 3, 10)];
    assert_eq!(meals[0].time, "13:45");
}
