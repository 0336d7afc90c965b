// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Folder creation for user files
//!
//! User files are never created at the filesystem root. That happens when
//! the application runs as a system account with no home directory.

use std::fs;
use std::path::Path;

use crate::error::{Result, SessionError};

/// True for a path with no parent: `/`, `C:\`, or an empty path.
pub fn is_filesystem_root(path: &Path) -> bool {
    path.parent().is_none()
}

/// Create `path` and its parents if absent, or check an existing folder is writable.
pub fn try_ensure_folder(path: &Path) -> Result<()> {
    if is_filesystem_root(path) {
        return Err(SessionError::RootFolder(path.to_path_buf()));
    }

    if path.exists() {
        let metadata = fs::metadata(path)?;
        if !metadata.is_dir() {
            return Err(SessionError::InvalidInput(format!(
                "{} exists and is not a folder",
                path.display()
            )));
        }
        if metadata.permissions().readonly() {
            return Err(SessionError::NotWritable(path.to_path_buf()));
        }
        return Ok(());
    }

    fs::create_dir_all(path)?;
    tracing::debug!("Created folder {}", path.display());
    Ok(())
}

/// Best-effort [`try_ensure_folder`]: logs the failure and returns `false`.
pub fn ensure_folder(path: &Path) -> bool {
    match try_ensure_folder(path) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Unable to use folder {}: {}", path.display(), e);
            false
        }
    }
}

/// Make sure the parent folder of a file exists.
pub(crate) fn ensure_parent(file: &Path) -> Result<()> {
    match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            if is_filesystem_root(parent) {
                return Err(SessionError::RootFolder(parent.to_path_buf()));
            }
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Read a text file shared with other TSTool installs.
///
/// Files written on Windows may use a single-byte code page rather than
/// UTF-8. Those bytes are decoded as Latin-1 so every line survives a
/// read-modify-write cycle.
pub(crate) fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            tracing::debug!("{} is not UTF-8, decoding as Latin-1", path.display());
            Ok(e.into_bytes().into_iter().map(char::from).collect())
        }
    }
}

/// Write `content` to a sibling temp file and rename it over `path`.
pub(crate) fn write_atomic(path: &Path, content: &str) -> Result<()> {
    ensure_parent(path)?;
    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content)?;
    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e.into());
    }
    Ok(())
}
