// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Flat `key = value` property files
//!
//! Used for both the UI state file and the user configuration file.
//! Keys are kept sorted so that rewriting a file produces a stable diff.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use crate::error::{Result, SessionError};
use crate::folders;

/// An in-memory property list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Properties {
    values: BTreeMap<String, String>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse property text. Comments, blank lines and lines without `=` are skipped.
    pub fn parse(content: &str) -> Self {
        let mut values = BTreeMap::new();

        for (line_number, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                tracing::debug!("Ignoring property line {} without '='", line_number + 1);
                continue;
            };

            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            values.insert(key.to_string(), unquote(value.trim()).to_string());
        }

        Self { values }
    }

    /// Read a property file. A missing file yields an empty list.
    pub fn read_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = folders::read_text(path)?;
        Ok(Self::parse(&content))
    }

    /// Render as text. Header lines become `#` comments followed by a blank line.
    pub fn to_text(&self, header: &[&str]) -> String {
        let mut out = String::new();
        for line in header {
            out.push_str("# ");
            out.push_str(line);
            out.push('\n');
        }
        if !header.is_empty() {
            out.push('\n');
        }
        for (key, value) in &self.values {
            out.push_str(key);
            out.push_str(" = ");
            if needs_quotes(value) {
                out.push('"');
                out.push_str(value);
                out.push('"');
            } else {
                out.push_str(value);
            }
            out.push('\n');
        }
        out
    }

    /// Write the property file, replacing any previous content.
    pub fn write_to(&self, path: &Path, header: &[&str]) -> Result<()> {
        folders::write_atomic(path, &self.to_text(header))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Set a property. Keys must be non-empty and may not contain `=`, `#` or a newline.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Result<()> {
        let key = key.into();
        let key_trimmed = key.trim();
        if key_trimmed.is_empty()
            || key_trimmed.starts_with('#')
            || key_trimmed.contains('=')
            || key_trimmed.contains('\n')
        {
            return Err(SessionError::InvalidInput(format!(
                "invalid property name: {:?}",
                key
            )));
        }

        let value = value.into();
        if value.contains('\n') {
            return Err(SessionError::InvalidInput(format!(
                "property {} value contains a newline",
                key_trimmed
            )));
        }

        self.values.insert(key_trimmed.to_string(), value);
        Ok(())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

fn unquote(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

fn needs_quotes(value: &str) -> bool {
    value.is_empty()
        || value.trim() != value
        || (value.starts_with('"') && value.ends_with('"'))
}
