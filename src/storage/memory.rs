// ABOUTME: In-memory persistence backend holding the serialized document
// ABOUTME: Same contract as the file backend; used by tests and ephemeral runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriQuest Project

//! In-memory profile storage
//!
//! Stores the serialized JSON text rather than the live struct, so the
//! backend exercises the same round-trip the file store does.

use std::sync::{Arc, Mutex, PoisonError};

use tracing::warn;

use super::ProfileStore;
use crate::models::UserProfile;

/// Keeps the serialized document in memory
///
/// Clones share the same slot, letting a test hold a handle to the "disk"
/// while the tracker owns the store.
#[derive(Debug, Clone, Default)]
pub struct MemoryProfileStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryProfileStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw serialized document, if any save succeeded
    #[must_use]
    pub fn document(&self) -> Option<String> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ProfileStore for MemoryProfileStore {
    fn save(&self, profile: &UserProfile) -> bool {
        match serde_json::to_string_pretty(profile) {
            Ok(document) => {
                *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(document);
                true
            }
            Err(error) => {
                warn!(%error, "profile save failed; in-memory state remains authoritative");
                false
            }
        }
    }

    fn load(&self) -> Option<UserProfile> {
        let slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        let raw = slot.as_deref()?;
        match serde_json::from_str(raw) {
            Ok(profile) => Some(profile),
            Err(error) => {
                warn!(%error, "profile load failed; falling back to defaults");
                None
            }
        }
    }
}
