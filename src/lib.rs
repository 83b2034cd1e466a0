// ABOUTME: Main library entry point for the NutriQuest tracking core
// ABOUTME: Gamified meal/workout/water logging with XP, ranks, and JSON persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriQuest Project

#![deny(unsafe_code)]

//! # NutriQuest
//!
//! The core of a personal nutrition/fitness dashboard: users log meals,
//! workouts, and water intake, earn experience points and ranks, and view
//! daily/weekly summaries. This crate owns the gamification layer, the
//! aggregation queries, and the persistence of the single per-user JSON
//! document; rendering and input collection belong to the embedding
//! front end.
//!
//! ## Architecture
//!
//! - **Models**: the [`models::UserProfile`] root aggregate and entry types
//! - **Progression**: experience awards, level-ups, rank points
//! - **Tracker**: the facade owning the profile, clock, and storage
//! - **Storage**: write-through JSON persistence with graceful degradation
//! - **Config**: environment-driven deployment settings and read-only catalogs
//!
//! The whole system is synchronous and single-writer: every mutation runs to
//! completion and is followed by a full save of the document.
//!
//! ## Example
//!
//! ```rust
//! use nutriquest::clock::SystemClock;
//! use nutriquest::config::{Catalog, TrackerFeatures};
//! use nutriquest::storage::MemoryProfileStore;
//! use nutriquest::Tracker;
//!
//! let mut tracker = Tracker::open(
//!     MemoryProfileStore::new(),
//!     SystemClock,
//!     TrackerFeatures::default(),
//!     Catalog::default(),
//! );
//!
//! tracker.log_meal("Oatmeal (1 cup)", 150.0, 5.0, 27.0, 3.0)?;
//! let today = tracker.profile().meals.keys().next().copied();
//! assert!(today.is_some());
//! # Ok::<(), nutriquest::AppError>(())
//! ```

/// Injectable clock abstraction
pub mod clock;
/// Deployment configuration and read-only catalogs
pub mod config;
/// System-wide constants
pub mod constants;
/// Unified error handling
pub mod errors;
/// Structured logging setup
pub mod logging;
/// Core data model
pub mod models;
/// Progression engine
pub mod progression;
/// Persistence backends
pub mod storage;
/// The tracker facade
pub mod tracker;

pub use errors::{AppError, AppResult, ErrorCode};
pub use models::UserProfile;
pub use tracker::Tracker;
