// ABOUTME: Persistence abstraction for the tracking document
// ABOUTME: ProfileStore trait with JSON-file and in-memory backends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriQuest Project

//! # Persistence Adapter
//!
//! The whole user state is one document, written through after every
//! mutation. Failure is never fatal: `save` reports `false`, `load` reports
//! `None`, both log at WARN, and the in-memory profile stays authoritative
//! until the next successful save.

/// JSON-file backend
pub mod json;
/// In-memory backend for tests and ephemeral deployments
pub mod memory;

pub use json::JsonProfileStore;
pub use memory::MemoryProfileStore;

use crate::models::UserProfile;

/// Persistence backend for the user profile document
///
/// All backends serialize the full profile; partial writes do not exist.
pub trait ProfileStore {
    /// Persist the profile, reporting success
    ///
    /// A `false` return means only durability is at risk; callers keep
    /// their in-memory state and may retry on the next mutation.
    fn save(&self, profile: &UserProfile) -> bool;

    /// Load the persisted profile, if one exists and parses
    ///
    /// `None` covers both "never saved" and "unreadable/malformed";
    /// callers fall back to a default profile either way.
    fn load(&self) -> Option<UserProfile>;
}
