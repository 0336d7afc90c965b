// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! History store implementation
//!
//! Plain text, one command file path per line, most recent first.
//! The file is re-read on every push because several TSTool processes
//! may share it.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::Result;
use crate::folders;
use crate::utils::lock_or_recover;

/// Default cap on the number of history entries
pub const DEFAULT_MAX_ENTRIES: usize = 100;

/// First line written to the history file
pub const HISTORY_HEADER: &str =
    "# TSTool command file history, most recent at top, shared between TSTool instances";

/// History store for recently opened command files
#[derive(Debug)]
pub struct HistoryStore {
    /// Path to the history file
    path: PathBuf,
    /// Maximum number of entries kept on push
    max_entries: usize,
    /// Serializes read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>, max_entries: usize) -> Self {
        Self {
            path: path.into(),
            max_entries: max_entries.max(1),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Load the history, newest first, at most `max_entries` long.
    /// A missing file is an empty history.
    pub fn load(&self) -> Result<Vec<String>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = folders::read_text(&self.path)?;
        let mut entries = parse_history(&content);
        entries.truncate(self.max_entries);
        Ok(entries)
    }

    /// Load the history, returning an empty list on any failure.
    pub fn read(&self) -> Vec<String> {
        match self.load() {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!("Unable to read history {}: {}", self.path.display(), e);
                Vec::new()
            }
        }
    }

    /// Put `command_file` at the top of the history and rewrite the file.
    ///
    /// The file is left untouched if it exists but cannot be read.
    pub fn push(&self, command_file: &str) -> Result<Vec<String>> {
        let _guard = lock_or_recover(&self.write_lock, "history");

        let existing = self.load()?;
        let updated = push_entry(existing, command_file, self.max_entries);
        self.write_entries(&updated)?;

        tracing::debug!(
            "Pushed {} onto history ({} entries)",
            command_file,
            updated.len()
        );
        Ok(updated)
    }

    /// Remove every entry, keeping only the header.
    pub fn clear(&self) -> Result<()> {
        let _guard = lock_or_recover(&self.write_lock, "history");
        self.write_entries(&[])
    }

    fn write_entries(&self, entries: &[String]) -> Result<()> {
        folders::write_atomic(&self.path, &format_history(entries))
    }
}

/// Parse history text, dropping comment and blank lines.
pub fn parse_history(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Render entries as history file text, header first.
pub fn format_history(entries: &[String]) -> String {
    let mut out = String::from(HISTORY_HEADER);
    out.push('\n');
    for entry in entries {
        out.push_str(entry);
        out.push('\n');
    }
    out
}

/// Prepend `command_file`, dropping earlier copies, blanks and comments, then truncate.
pub fn push_entry(history: Vec<String>, command_file: &str, max_entries: usize) -> Vec<String> {
    let mut updated = Vec::with_capacity(history.len() + 1);
    updated.push(command_file.to_string());
    updated.extend(history.into_iter().filter(|old| {
        old != command_file && !old.trim().is_empty() && !old.starts_with('#')
    }));
    updated.truncate(max_entries.max(1));
    updated
}
