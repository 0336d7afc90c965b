// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! tstool-session - TSTool user files from the command line
//!
//! Entry point for the tstool-session CLI application.

use std::fs::OpenOptions;
use std::io;
use std::process::ExitCode;
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tstool_session::cli::Cli;
use tstool_session::commands;
use tstool_session::folders;
use tstool_session::layout::{current_user_name, Layout};
use tstool_session::utils;

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_tracing(&cli, &commands::resolve_layout(&cli));
    let session = commands::open_session(&cli);

    tracing::debug!(
        "Session for version {} under {}",
        session.major_version(),
        session.user_folder().display()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match commands::execute(&cli, &session, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", utils::format_error(&e));
            ExitCode::FAILURE
        }
    }
}

fn build_env_filter(verbose: u8) -> EnvFilter {
    let mut env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into());

    // `-v` enables session diagnostics; `-vv` and up enables everything. `RUST_LOG` still applies.
    let directive = match verbose {
        0 => None,
        1 => Some("tstool_session=debug"),
        _ => Some("debug"),
    };
    if let Some(directive) = directive {
        if let Ok(parsed) = directive.parse() {
            env_filter = env_filter.add_directive(parsed);
        }
    }
    env_filter
}

fn init_tracing(cli: &Cli, layout: &Layout) {
    let env_filter = build_env_filter(cli.verbose);

    if cli.log_file {
        let logs_folder = layout.logs_folder();
        if folders::is_filesystem_root(layout.home()) {
            eprintln!("Log file disabled, home folder is the filesystem root");
        } else if folders::ensure_folder(&logs_folder) {
            let path = layout.log_file(&current_user_name());
            match OpenOptions::new().create(true).append(true).open(&path) {
                Ok(file) => {
                    tracing_subscriber::fmt()
                        .with_env_filter(env_filter)
                        .with_ansi(false)
                        .with_writer(Mutex::new(file))
                        .init();
                    return;
                }
                Err(e) => eprintln!("Unable to open log file {}: {}", path.display(), e),
            }
        } else {
            eprintln!("Unable to create {}", logs_folder.display());
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}
