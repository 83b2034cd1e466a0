// ABOUTME: Read-only reference catalogs consumed by the tracking core
// ABOUTME: Foods by category, workouts, water presets, rank table, achievements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriQuest Project

//! Reference catalogs
//!
//! Catalog data is supplied to the core read-only: built-in defaults ship in
//! code and a deployment may deserialize a replacement from JSON. The earned
//! achievement set on the profile is authoritative; ids the catalog no
//! longer knows are skipped at display time, never an error.

use serde::{Deserialize, Serialize};

use crate::errors::AppResult;

/// A food the quick-select picker offers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Display name, including the serving hint
    pub name: String,
    /// Calories per serving
    pub calories: f64,
    /// Protein per serving in grams
    pub protein_g: f64,
    /// Carbohydrates per serving in grams
    pub carbs_g: f64,
    /// Fat per serving in grams
    pub fat_g: f64,
}

/// A named group of foods (Breakfast, Lunch, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodCategory {
    /// Category display name
    pub name: String,
    /// Foods in this category
    pub items: Vec<FoodItem>,
}

/// All quick-select foods, grouped by category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodCatalog {
    /// Ordered categories as the picker presents them
    pub categories: Vec<FoodCategory>,
}

impl FoodCatalog {
    /// Look up a food by exact name across all categories
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&FoodItem> {
        self.categories
            .iter()
            .flat_map(|category| category.items.iter())
            .find(|item| item.name == name)
    }

    /// Category names in presentation order
    #[must_use]
    pub fn category_names(&self) -> Vec<&str> {
        self.categories
            .iter()
            .map(|category| category.name.as_str())
            .collect()
    }
}

/// A workout the quick-select picker offers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutItem {
    /// Display name, including the duration hint
    pub name: String,
    /// Estimated calories burned
    pub calories_burned: f64,
}

/// A preset water serving size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterPreset {
    /// Display label
    pub label: String,
    /// Serving size in milliliters
    pub amount_ml: u32,
}

/// One tier of the rank ladder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankTier {
    /// Rank label
    pub label: String,
    /// Minimum rank points required for this tier
    pub min_points: u32,
    /// Display icon
    pub icon: String,
}

/// The ascending rank ladder
///
/// Tiers are ordered by `min_points`; the zero-threshold tier is the floor
/// every point total matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankTable {
    /// Tiers in ascending threshold order
    pub tiers: Vec<RankTier>,
}

impl RankTable {
    /// The highest tier whose threshold does not exceed `rank_points`
    ///
    /// Scans from the top of the ladder down; falls back to the lowest tier
    /// when nothing above it matches.
    #[must_use]
    pub fn rank_for(&self, rank_points: u32) -> Option<&RankTier> {
        self.tiers
            .iter()
            .rev()
            .find(|tier| rank_points >= tier.min_points)
            .or_else(|| self.tiers.first())
    }
}

/// Display metadata for one achievement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementDef {
    /// Stable identifier stored in the earned set
    pub id: String,
    /// Display name
    pub name: String,
    /// Unlock condition, as shown to the user
    pub description: String,
    /// Display icon
    pub icon: String,
}

/// The achievement catalog: id to display metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementCatalog {
    /// All defined achievements
    pub entries: Vec<AchievementDef>,
}

impl AchievementCatalog {
    /// Look up an achievement definition by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&AchievementDef> {
        self.entries.iter().find(|def| def.id == id)
    }

    /// Number of defined achievements
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The full set of read-only catalogs the core consumes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Quick-select foods
    pub foods: FoodCatalog,
    /// Quick-select workouts
    pub workouts: Vec<WorkoutItem>,
    /// Water serving presets
    pub water_presets: Vec<WaterPreset>,
    /// The rank ladder
    pub ranks: RankTable,
    /// Achievement display metadata
    pub achievements: AchievementCatalog,
}

impl Catalog {
    /// Deserialize a deployment-supplied catalog document
    ///
    /// # Errors
    /// Returns a serialization error when the document is malformed.
    pub fn from_json(raw: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            foods: builtin_foods(),
            workouts: builtin_workouts(),
            water_presets: builtin_water_presets(),
            ranks: builtin_ranks(),
            achievements: builtin_achievements(),
        }
    }
}

fn food(name: &str, calories: f64, protein_g: f64, carbs_g: f64, fat_g: f64) -> FoodItem {
    FoodItem {
        name: name.into(),
        calories,
        protein_g,
        carbs_g,
        fat_g,
    }
}

fn builtin_foods() -> FoodCatalog {
    FoodCatalog {
        categories: vec![
            FoodCategory {
                name: "Breakfast".into(),
                items: vec![
                    food("Oatmeal (1 cup)", 150.0, 5.0, 27.0, 3.0),
                    food("Eggs (2)", 155.0, 13.0, 1.0, 11.0),
                    food("Banana", 105.0, 1.0, 27.0, 0.0),
                    food("Greek Yogurt (1 cup)", 130.0, 23.0, 9.0, 0.0),
                    food("Toast with Butter", 200.0, 6.0, 28.0, 9.0),
                    food("Smoothie (avg)", 250.0, 8.0, 45.0, 6.0),
                ],
            },
            FoodCategory {
                name: "Lunch".into(),
                items: vec![
                    food("Chicken Breast (100g)", 165.0, 31.0, 0.0, 3.0),
                    food("Rice (1 cup)", 206.0, 4.0, 45.0, 0.0),
                    food("Salmon (100g)", 206.0, 22.0, 0.0, 13.0),
                    food("Salad (avg)", 150.0, 5.0, 12.0, 8.0),
                    food("Pasta (1 cup)", 220.0, 8.0, 43.0, 1.0),
                    food("Burger", 540.0, 30.0, 40.0, 28.0),
                ],
            },
            FoodCategory {
                name: "Dinner".into(),
                items: vec![
                    food("Grilled Fish (100g)", 180.0, 25.0, 0.0, 8.0),
                    food("Broccoli (1 cup)", 55.0, 3.0, 11.0, 0.0),
                    food("Sweet Potato", 103.0, 2.0, 24.0, 0.0),
                    food("Steak (100g)", 250.0, 26.0, 0.0, 15.0),
                    food("Spinach (1 cup)", 7.0, 1.0, 1.0, 0.0),
                    food("Pizza (1 slice)", 285.0, 12.0, 36.0, 10.0),
                ],
            },
            FoodCategory {
                name: "Snacks".into(),
                items: vec![
                    food("Apple", 95.0, 0.0, 25.0, 0.0),
                    food("Almonds (1 oz)", 164.0, 6.0, 6.0, 14.0),
                    food("Protein Bar", 200.0, 20.0, 22.0, 5.0),
                    food("Greek Yogurt (small)", 100.0, 17.0, 7.0, 0.0),
                    food("Peanut Butter (2 tbsp)", 188.0, 8.0, 7.0, 16.0),
                    food("Chips (1 oz)", 150.0, 2.0, 15.0, 10.0),
                ],
            },
            FoodCategory {
                name: "Beverages".into(),
                items: vec![
                    food("Water", 0.0, 0.0, 0.0, 0.0),
                    food("Green Tea", 2.0, 0.0, 0.0, 0.0),
                    food("Coffee (black)", 5.0, 0.0, 0.0, 0.0),
                    food("Orange Juice (1 cup)", 112.0, 2.0, 26.0, 0.0),
                    food("Soda (1 can)", 140.0, 0.0, 39.0, 0.0),
                    food("Protein Shake", 180.0, 25.0, 8.0, 2.0),
                ],
            },
        ],
    }
}

fn builtin_workouts() -> Vec<WorkoutItem> {
    let workout = |name: &str, calories_burned: f64| WorkoutItem {
        name: name.into(),
        calories_burned,
    };
    vec![
        workout("Running (30 min)", 300.0),
        workout("Cycling (30 min)", 250.0),
        workout("Swimming (30 min)", 350.0),
        workout("Weight Lifting (45 min)", 180.0),
        workout("Yoga (30 min)", 120.0),
        workout("Walking (30 min)", 150.0),
        workout("HIIT (20 min)", 280.0),
        workout("Rowing (30 min)", 260.0),
    ]
}

fn builtin_water_presets() -> Vec<WaterPreset> {
    let preset = |label: &str, amount_ml: u32| WaterPreset {
        label: label.into(),
        amount_ml,
    };
    vec![
        preset("Glass", 250),
        preset("Small Bottle", 500),
        preset("Large Bottle", 1000),
        preset("Cup", 200),
    ]
}

fn builtin_ranks() -> RankTable {
    let tier = |label: &str, min_points: u32, icon: &str| RankTier {
        label: label.into(),
        min_points,
        icon: icon.into(),
    };
    RankTable {
        tiers: vec![
            tier("BEGINNER", 0, "\u{1f331}"),
            tier("APPRENTICE", 100, "\u{1f468}\u{200d}\u{1f373}"),
            tier("CHEF", 250, "\u{1f37d}\u{fe0f}"),
            tier("MASTER CHEF", 500, "\u{1f468}\u{200d}\u{1f373}"),
            tier("NUTRITION EXPERT", 1000, "\u{1f49a}"),
            tier("HEALTH CHAMPION", 2000, "\u{1f3c6}"),
            tier("LEGEND", 5000, "\u{1f451}"),
        ],
    }
}

fn builtin_achievements() -> AchievementCatalog {
    let def = |id: &str, name: &str, description: &str, icon: &str| AchievementDef {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        icon: icon.into(),
    };
    AchievementCatalog {
        entries: vec![
            def("first_meal", "First Bite", "Log your first meal", "\u{1f37d}\u{fe0f}"),
            def("five_meals", "Meal Logger", "Log 5 meals", "\u{1f4dd}"),
            def("on_target", "Perfect Day", "Stay within calorie goal", "\u{1f3af}"),
            def("week_on_track", "Consistency", "7 days on target", "\u{1f4c5}"),
            def("macro_master", "Macro Master", "Hit macros within 10%", "\u{1f4aa}"),
            def(
                "high_protein",
                "Protein Powerhouse",
                "100g+ protein in one day",
                "\u{1f95a}",
            ),
            def(
                "veggie_warrior",
                "Veggie Warrior",
                "200+ calories from veggies",
                "\u{1f96c}",
            ),
            def("water_warrior", "Hydration Hero", "8+ glasses of water", "\u{1f4a7}"),
            def(
                "calorie_deficit",
                "Deficit Achiever",
                "Maintain 500 cal deficit",
                "\u{1f4c9}",
            ),
            def(
                "weight_milestone",
                "Milestone Reached",
                "Reach weight goal",
                "\u{1f3c6}",
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_for_picks_highest_matching_tier() {
        let ranks = builtin_ranks();
        assert_eq!(ranks.rank_for(0).unwrap().label, "BEGINNER");
        assert_eq!(ranks.rank_for(99).unwrap().label, "BEGINNER");
        assert_eq!(ranks.rank_for(100).unwrap().label, "APPRENTICE");
        assert_eq!(ranks.rank_for(250).unwrap().label, "CHEF");
        assert_eq!(ranks.rank_for(5000).unwrap().label, "LEGEND");
        assert_eq!(ranks.rank_for(u32::MAX).unwrap().label, "LEGEND");
    }

    #[test]
    fn test_builtin_rank_thresholds_ascend() {
        let ranks = builtin_ranks();
        let thresholds: Vec<u32> = ranks.tiers.iter().map(|t| t.min_points).collect();
        let mut sorted = thresholds.clone();
        sorted.sort_unstable();
        assert_eq!(thresholds, sorted);
        assert_eq!(thresholds[0], 0);
    }

    #[test]
    fn test_food_lookup_by_name() {
        let foods = builtin_foods();
        let item = foods.find("Chicken Breast (100g)").unwrap();
        assert!((item.protein_g - 31.0).abs() < f64::EPSILON);
        assert!(foods.find("Unobtainium").is_none());
    }

    #[test]
    fn test_achievement_lookup() {
        let achievements = builtin_achievements();
        assert_eq!(achievements.get("first_meal").unwrap().name, "First Bite");
        assert!(achievements.get("nonexistent").is_none());
        assert_eq!(achievements.len(), 10);
    }

    #[test]
    fn test_catalog_round_trips_through_json() {
        let catalog = Catalog::default();
        let json = serde_json::to_string(&catalog).unwrap();
        let restored = Catalog::from_json(&json).unwrap();
        assert_eq!(catalog, restored);
    }
}
