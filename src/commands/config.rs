// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! User configuration file commands

use std::io::Write;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::error::{Result, SessionError};
use crate::session::Session;

/// Execute a config subcommand
pub fn execute(
    command: &ConfigCommands,
    session: &Session,
    format: &OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    match command {
        ConfigCommands::Init { force } => {
            let path = session.config_file();
            if path.exists() && !force {
                return Err(SessionError::Config(format!(
                    "{} already exists, use --force to replace it",
                    path.display()
                )));
            }
            if !session.create_config_file() {
                return Err(SessionError::NotWritable(session.system_folder()));
            }
            if matches!(format, OutputFormat::Text) {
                writeln!(out, "Created {}", path.display())?;
            }
            Ok(())
        }
        ConfigCommands::Get { key } => {
            let value = session.config_property(key).ok_or_else(|| {
                SessionError::Config(format!(
                    "{} not set in {}",
                    key,
                    session.config_file().display()
                ))
            })?;
            if matches!(format, OutputFormat::Json) {
                writeln!(out, "{}", serde_json::to_string(&value)?)?;
            } else {
                writeln!(out, "{}", value)?;
            }
            Ok(())
        }
    }
}
