// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::io;
use std::path::PathBuf;

use tstool_session::error::SessionError;
use tstool_session::utils::format_error;

#[test]
fn test_io_error_conversion() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
    let error: SessionError = io_error.into();

    match error {
        SessionError::Io(_) => {} // Expected
        _ => panic!("Expected Io error, got different error type"),
    }
}

#[test]
fn test_json_error_conversion() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: SessionError = json_error.into();
    assert!(error.to_string().starts_with("JSON error"));
}

#[test]
fn test_config_error_display() {
    let error = SessionError::Config("CommandFileHistoryMax must be positive".to_string());
    assert_eq!(
        error.to_string(),
        "Configuration error: CommandFileHistoryMax must be positive"
    );
}

#[test]
fn test_root_folder_display() {
    let error = SessionError::RootFolder(PathBuf::from("/"));
    assert_eq!(
        error.to_string(),
        "Refusing to write user files under filesystem root: /"
    );
}

#[test]
fn test_format_error_prefix() {
    let error = SessionError::InvalidInput("empty key".to_string());
    assert_eq!(format_error(&error), "Error: Invalid input: empty key");
}
