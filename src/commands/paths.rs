// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Folder layout commands: paths, init, templates

use std::io::Write;
use std::path::PathBuf;

use serde::Serialize;

use crate::cli::args::OutputFormat;
use crate::error::{Result, SessionError};
use crate::session::Session;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InitReport {
    user_files_initialized: bool,
    config_file: PathBuf,
    config_file_created: bool,
}

/// Print every resolved user file location.
pub fn execute_paths(session: &Session, format: &OutputFormat, out: &mut dyn Write) -> Result<()> {
    let paths = session.paths();

    if matches!(format, OutputFormat::Json) {
        writeln!(out, "{}", serde_json::to_string_pretty(&paths)?)?;
        return Ok(());
    }

    let rows = [
        ("Major version", paths.major_version.to_string()),
        ("User folder", paths.user_folder.display().to_string()),
        ("Version folder", paths.major_version_folder.display().to_string()),
        ("Datastores", paths.datastores_folder.display().to_string()),
        ("Logs", paths.logs_folder.display().to_string()),
        ("Plugins", paths.plugins_folder.display().to_string()),
        ("System", paths.system_folder.display().to_string()),
        ("Config file", paths.config_file.display().to_string()),
        ("Log file", paths.log_file.display().to_string()),
        ("History file", paths.history_file.display().to_string()),
        ("UI state file", paths.ui_state_file.display().to_string()),
        ("Graph templates", paths.graph_template_folder.display().to_string()),
    ];
    for (label, value) in rows {
        writeln!(out, "{:<16} {}", format!("{}:", label), value)?;
    }
    Ok(())
}

/// Create user folders, and the configuration file when it does not exist yet.
pub fn execute_init(session: &Session, format: &OutputFormat, out: &mut dyn Write) -> Result<()> {
    let initialized = session.initialize_user_files();
    if !initialized {
        return Err(SessionError::NotWritable(session.major_version_folder()));
    }

    let config_file = session.config_file();
    let config_file_created = !config_file.exists() && session.create_config_file();

    if matches!(format, OutputFormat::Json) {
        let report = InitReport {
            user_files_initialized: initialized,
            config_file,
            config_file_created,
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    writeln!(
        out,
        "Initialized user files in {}",
        session.major_version_folder().display()
    )?;
    if config_file_created {
        writeln!(out, "Created {}", config_file.display())?;
    }
    Ok(())
}

/// List graph template files.
pub fn execute_templates(
    session: &Session,
    format: &OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let files = session.graph_template_files();

    if matches!(format, OutputFormat::Json) {
        writeln!(out, "{}", serde_json::to_string_pretty(&files)?)?;
        return Ok(());
    }

    for file in files {
        writeln!(out, "{}", file.display())?;
    }
    Ok(())
}
