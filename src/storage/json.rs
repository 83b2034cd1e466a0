// ABOUTME: JSON-file persistence backend for the tracking document
// ABOUTME: One pretty-printed document per user, directory created on demand
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriQuest Project

//! File-backed profile storage

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use super::ProfileStore;
use crate::config::TrackerConfig;
use crate::models::UserProfile;

/// Stores the profile as one pretty-printed JSON document on disk
#[derive(Debug, Clone)]
pub struct JsonProfileStore {
    path: PathBuf,
}

impl JsonProfileStore {
    /// Create a store writing to the given document path
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store at the deployment's configured profile path
    #[must_use]
    pub fn from_config(config: &TrackerConfig) -> Self {
        Self::new(config.profile_path())
    }

    /// Path of the persisted document
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn try_save(&self, profile: &UserProfile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating data dir {}", parent.display()))?;
        }
        let document = serde_json::to_string_pretty(profile).context("serializing profile")?;
        fs::write(&self.path, document)
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }

    fn try_load(&self) -> Result<Option<UserProfile>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        let profile = serde_json::from_str(&raw).context("parsing profile document")?;
        Ok(Some(profile))
    }
}

impl ProfileStore for JsonProfileStore {
    fn save(&self, profile: &UserProfile) -> bool {
        match self.try_save(profile) {
            Ok(()) => {
                debug!(path = %self.path.display(), "profile saved");
                true
            }
            Err(error) => {
                warn!(path = %self.path.display(), %error, "profile save failed; in-memory state remains authoritative");
                false
            }
        }
    }

    fn load(&self) -> Option<UserProfile> {
        match self.try_load() {
            Ok(profile) => profile,
            Err(error) => {
                warn!(path = %self.path.display(), %error, "profile load failed; falling back to defaults");
                None
            }
        }
    }
}
