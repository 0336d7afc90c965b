// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for TSTool session files
//!
//! The session surface is best effort, so most of these are logged and
//! swallowed by [`crate::session::Session`]. The lower-level stores return
//! them so callers that care can see why a write failed.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for session operations
#[derive(Error, Debug)]
pub enum SessionError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Refused to create or write user files at the filesystem root
    #[error("Refusing to write user files under filesystem root: {}", .0.display())]
    RootFolder(PathBuf),

    /// Folder exists but cannot be written
    #[error("Folder is not writable: {}", .0.display())]
    NotWritable(PathBuf),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for session operations
pub type Result<T> = std::result::Result<T, SessionError>;
