// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! UI state properties
//!
//! Last selections in wizards, choices, window layout and similar. Loaded
//! when a session opens and written back at intermediate points and on exit.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::Result;
use crate::props::Properties;
use crate::utils::lock_or_recover;

const UI_STATE_HEADER: &[&str] = &["TSTool UI state, shared between TSTool instances"];

/// UI state properties backed by a file
#[derive(Debug)]
pub struct UiStateStore {
    path: PathBuf,
    props: Mutex<Properties>,
}

impl UiStateStore {
    /// Create a store without touching the file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            props: Mutex::new(Properties::new()),
        }
    }

    /// Create a store and load whatever the file holds.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let store = Self::new(path);
        store.read();
        store
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace in-memory properties with the file contents.
    pub fn load(&self) -> Result<()> {
        let loaded = Properties::read_from(&self.path)?;
        *lock_or_recover(&self.props, "UI state") = loaded;
        Ok(())
    }

    /// Best-effort [`load`](Self::load). On failure the in-memory properties are kept.
    pub fn read(&self) {
        if let Err(e) = self.load() {
            tracing::warn!("Unable to read UI state {}: {}", self.path.display(), e);
        }
    }

    /// Write the properties to the file.
    pub fn write(&self) -> Result<()> {
        let props = lock_or_recover(&self.props, "UI state");
        props.write_to(&self.path, UI_STATE_HEADER)?;
        tracing::debug!(
            "Wrote {} UI state properties to {}",
            props.len(),
            self.path.display()
        );
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<String> {
        lock_or_recover(&self.props, "UI state")
            .get(name)
            .map(str::to_string)
    }

    pub fn set(&self, name: &str, value: &str) -> Result<()> {
        lock_or_recover(&self.props, "UI state").set(name, value)
    }

    pub fn remove(&self, name: &str) -> Option<String> {
        lock_or_recover(&self.props, "UI state").remove(name)
    }

    /// Copy of the current properties.
    pub fn snapshot(&self) -> Properties {
        lock_or_recover(&self.props, "UI state").clone()
    }
}
