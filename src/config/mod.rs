// ABOUTME: Configuration management module for deployment settings and catalogs
// ABOUTME: Environment-driven tracker config plus the read-only reference catalogs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriQuest Project

//! Configuration module
//!
//! Two kinds of configuration live here:
//!
//! - **Environment**: per-deployment settings parsed from environment
//!   variables (data directory, weight unit, feature flags)
//! - **Catalog**: read-only reference data the core consumes but never
//!   mutates (foods, workouts, water presets, rank table, achievements)

/// Environment-driven deployment configuration
pub mod environment;

/// Read-only reference catalogs
pub mod catalog;

pub use catalog::Catalog;
pub use environment::{TrackerConfig, TrackerFeatures, WeightUnit};
