// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Command file history commands

use std::io::Write;

use crate::cli::args::{HistoryCommands, OutputFormat};
use crate::error::Result;
use crate::session::Session;

/// Execute a history subcommand
pub fn execute(
    command: &HistoryCommands,
    session: &Session,
    format: &OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    match command {
        HistoryCommands::List { limit } => {
            let mut history = session.read_history();
            if let Some(limit) = limit {
                history.truncate(*limit);
            }
            print_entries(&history, format, out)
        }
        HistoryCommands::Push { path } => {
            session.push_history(path)?;
            if matches!(format, OutputFormat::Json) {
                print_entries(&session.read_history(), format, out)?;
            }
            Ok(())
        }
        HistoryCommands::Clear => {
            session.clear_history()?;
            if matches!(format, OutputFormat::Text) {
                writeln!(out, "Cleared {}", session.history_file().display())?;
            }
            Ok(())
        }
    }
}

fn print_entries(entries: &[String], format: &OutputFormat, out: &mut dyn Write) -> Result<()> {
    if matches!(format, OutputFormat::Json) {
        writeln!(out, "{}", serde_json::to_string_pretty(entries)?)?;
        return Ok(());
    }
    for entry in entries {
        writeln!(out, "{}", entry)?;
    }
    Ok(())
}
