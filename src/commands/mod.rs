// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Subcommand implementations
//!
//! Each command writes its output to the given writer so tests can capture it.

use std::io::Write;

use crate::cli::{Cli, Commands};
use crate::config::SessionOptions;
use crate::error::Result;
use crate::layout::Layout;
use crate::session::Session;

pub mod config;
pub mod history;
pub mod paths;
pub mod state;

/// Layout selected by `--home` and `--major-version`.
pub fn resolve_layout(cli: &Cli) -> Layout {
    let home = cli.home.clone().unwrap_or_else(Layout::resolve_home);
    Layout::new(home, cli.major_version)
}

/// Build the session described by the global CLI flags.
pub fn open_session(cli: &Cli) -> Session {
    let layout = resolve_layout(cli);

    let mut options = SessionOptions::load(&layout.config_file());
    if let Some(max) = cli.history_max {
        options = options.with_history_max(max);
    }

    Session::with_options(layout, options)
}

/// Run the selected subcommand against `session`.
pub fn execute(cli: &Cli, session: &Session, out: &mut dyn Write) -> Result<()> {
    match &cli.command {
        None | Some(Commands::Paths) => paths::execute_paths(session, &cli.format, out),
        Some(Commands::Init) => paths::execute_init(session, &cli.format, out),
        Some(Commands::Templates) => paths::execute_templates(session, &cli.format, out),
        Some(Commands::History(args)) => history::execute(&args.command, session, &cli.format, out),
        Some(Commands::State(args)) => state::execute(&args.command, session, &cli.format, out),
        Some(Commands::Config(args)) => config::execute(&args.command, session, &cli.format, out),
    }
}
