// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! UI state commands

use std::io::Write;

use crate::cli::args::{OutputFormat, StateCommands};
use crate::error::{Result, SessionError};
use crate::session::Session;

/// Execute a UI state subcommand
pub fn execute(
    command: &StateCommands,
    session: &Session,
    format: &OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    match command {
        StateCommands::List => {
            let props = session.ui_state_properties();
            if matches!(format, OutputFormat::Json) {
                writeln!(out, "{}", serde_json::to_string_pretty(&props)?)?;
                return Ok(());
            }
            for (key, value) in props.iter() {
                writeln!(out, "{} = {}", key, value)?;
            }
            Ok(())
        }
        StateCommands::Get { key } => {
            let value = session.ui_state_property(key).ok_or_else(|| {
                SessionError::InvalidInput(format!("UI state property not set: {}", key))
            })?;
            if matches!(format, OutputFormat::Json) {
                writeln!(out, "{}", serde_json::to_string(&value)?)?;
            } else {
                writeln!(out, "{}", value)?;
            }
            Ok(())
        }
        StateCommands::Set { key, value } => {
            session.set_ui_state_property(key, value)?;
            session.write_ui_state()
        }
        StateCommands::Unset { key } => {
            if session.remove_ui_state_property(key).is_none() {
                tracing::debug!("UI state property {} was not set", key);
                return Ok(());
            }
            session.write_ui_state()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_get_missing_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let session = Session::with_home(temp_dir.path(), 14);

        let mut out = Vec::new();
        let result = execute(
            &StateCommands::Get {
                key: "Nope".to_string(),
            },
            &session,
            &OutputFormat::Text,
            &mut out,
        );
        assert!(matches!(result, Err(SessionError::InvalidInput(_))));
    }

    #[test]
    fn test_set_persists() {
        let temp_dir = TempDir::new().unwrap();
        let session = Session::with_home(temp_dir.path(), 14);

        let mut out = Vec::new();
        execute(
            &StateCommands::Set {
                key: "Graph.Width".to_string(),
                value: "800".to_string(),
            },
            &session,
            &OutputFormat::Text,
            &mut out,
        )
        .unwrap();

        let content = std::fs::read_to_string(session.ui_state_file()).unwrap();
        assert!(content.contains("Graph.Width = 800"));
    }

    #[test]
    fn test_set_invalid_key() {
        let temp_dir = TempDir::new().unwrap();
        let session = Session::with_home(temp_dir.path(), 14);

        let mut out = Vec::new();
        let result = execute(
            &StateCommands::Set {
                key: "a=b".to_string(),
                value: "x".to_string(),
            },
            &session,
            &OutputFormat::Text,
            &mut out,
        );
        assert!(result.is_err());
        assert!(!session.ui_state_file().exists());
    }

    #[test]
    fn test_list_json() {
        let temp_dir = TempDir::new().unwrap();
        let session = Session::with_home(temp_dir.path(), 14);
        session.set_ui_state_property("A", "1").unwrap();

        let mut out = Vec::new();
        execute(&StateCommands::List, &session, &OutputFormat::Json, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["A"], "1");
    }
}
