// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Data directory, weight unit, and feature flags parsed from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriQuest Project

//! Environment-based deployment configuration
//!
//! The historical deployments of this tracker shipped as near-identical
//! variants (with and without workout/water tracking, pounds vs kilograms).
//! Those variants collapse into one engine behind [`TrackerFeatures`] and
//! [`WeightUnit`], both fixed per deployment here.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::constants::{env_keys, storage};
use crate::errors::AppError;

/// Weight unit for a deployment; never a per-entry attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    /// Imperial pounds
    #[default]
    Pounds,
    /// Metric kilograms
    Kilograms,
}

impl WeightUnit {
    /// Short unit suffix for display (`lbs` / `kg`)
    #[must_use]
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::Pounds => "lbs",
            Self::Kilograms => "kg",
        }
    }
}

impl FromStr for WeightUnit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lbs" | "lb" | "pounds" => Ok(Self::Pounds),
            "kg" | "kilograms" => Ok(Self::Kilograms),
            _ => Err(AppError::config(format!("Invalid weight unit: {s}"))),
        }
    }
}

/// Runtime feature flags for this deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerFeatures {
    /// Whether workout logging is enabled
    pub workouts: bool,
    /// Whether water-intake logging is enabled
    pub water: bool,
}

impl Default for TrackerFeatures {
    fn default() -> Self {
        Self {
            workouts: true,
            water: true,
        }
    }
}

/// Deployment configuration for the tracking core
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Directory the persisted profile document lives in
    pub data_dir: PathBuf,
    /// Weight unit for this deployment
    pub weight_unit: WeightUnit,
    /// Feature flags for this deployment
    pub features: TrackerFeatures,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            weight_unit: WeightUnit::default(),
            features: TrackerFeatures::default(),
        }
    }
}

impl TrackerConfig {
    /// Build configuration from environment variables, defaulting anything unset
    ///
    /// Unparseable values fall back to their defaults with a warning rather
    /// than failing startup.
    #[must_use]
    pub fn from_env() -> Self {
        let data_dir = env::var(env_keys::DATA_DIR)
            .map_or_else(|_| default_data_dir(), PathBuf::from);

        let weight_unit = env::var(env_keys::WEIGHT_UNIT).map_or_else(
            |_| WeightUnit::default(),
            |raw| {
                raw.parse().unwrap_or_else(|_| {
                    warn!(value = %raw, "unrecognized weight unit, defaulting to lbs");
                    WeightUnit::default()
                })
            },
        );

        let features = TrackerFeatures {
            workouts: env_flag(env_keys::FEATURE_WORKOUTS, true),
            water: env_flag(env_keys::FEATURE_WATER, true),
        };

        let config = Self {
            data_dir,
            weight_unit,
            features,
        };
        info!(
            data_dir = %config.data_dir.display(),
            weight_unit = ?config.weight_unit,
            workouts = config.features.workouts,
            water = config.features.water,
            "tracker configuration loaded"
        );
        config
    }

    /// Full path of the persisted profile document under `data_dir`
    #[must_use]
    pub fn profile_path(&self) -> PathBuf {
        self.data_dir.join(storage::PROFILE_FILE)
    }
}

/// Platform data directory fallback when no override is set
fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from(storage::DEFAULT_DIR_NAME),
        |base| base.join(storage::DEFAULT_DIR_NAME),
    )
}

fn env_flag(key: &str, default: bool) -> bool {
    env::var(key).map_or(default, |raw| {
        matches!(raw.to_lowercase().as_str(), "1" | "true" | "yes" | "on")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_unit_parsing() {
        assert_eq!("lbs".parse::<WeightUnit>().unwrap(), WeightUnit::Pounds);
        assert_eq!("KG".parse::<WeightUnit>().unwrap(), WeightUnit::Kilograms);
        assert!("stones".parse::<WeightUnit>().is_err());
    }

    #[test]
    fn test_default_features_enable_everything() {
        let features = TrackerFeatures::default();
        assert!(features.workouts);
        assert!(features.water);
    }

    #[test]
    fn test_profile_path_is_under_data_dir() {
        let config = TrackerConfig {
            data_dir: PathBuf::from("/tmp/nq"),
            ..TrackerConfig::default()
        };
        assert_eq!(config.profile_path(), PathBuf::from("/tmp/nq/tracker.json"));
    }
}
