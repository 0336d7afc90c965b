// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for tstool-session.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Major version used when none is given
pub const DEFAULT_MAJOR_VERSION: u32 = 14;

/// tstool-session - manage TSTool user files
#[derive(Parser, Debug)]
#[command(name = "tstool-session")]
#[command(version, about = "Manage TSTool user files, history and UI state")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Home directory holding .tstool (defaults to $TSTOOL_HOME or the user home)
    #[arg(long, global = true)]
    pub home: Option<PathBuf>,

    /// TSTool major version, selects the versioned user folder
    #[arg(
        long,
        global = true,
        env = "TSTOOL_MAJOR_VERSION",
        default_value_t = DEFAULT_MAJOR_VERSION
    )]
    pub major_version: u32,

    /// Maximum history entries (overrides CommandFileHistoryMax in TSTool.cfg)
    #[arg(long, global = true)]
    pub history_max: Option<usize>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Write logs to the session log file instead of stderr
    #[arg(long, global = true)]
    pub log_file: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create user folders and the configuration file if missing
    Init,

    /// Show resolved user file locations (default when no command given)
    Paths,

    /// Command file history
    History(HistoryArgs),

    /// UI state properties
    State(StateArgs),

    /// User configuration file
    Config(ConfigArgs),

    /// List graph templates
    Templates,
}

/// Arguments for history management
#[derive(clap::Args, Debug)]
pub struct HistoryArgs {
    #[command(subcommand)]
    pub command: HistoryCommands,
}

/// History subcommands
#[derive(Subcommand, Debug)]
pub enum HistoryCommands {
    /// List command files, most recent first
    List {
        /// Maximum number of entries to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Record that a command file was opened
    Push {
        /// Path to the command file
        path: String,
    },

    /// Remove all entries
    Clear,
}

/// Arguments for UI state management
#[derive(clap::Args, Debug)]
pub struct StateArgs {
    #[command(subcommand)]
    pub command: StateCommands,
}

/// UI state subcommands
#[derive(Subcommand, Debug)]
pub enum StateCommands {
    /// List all properties
    List,

    /// Get a property value
    Get {
        /// Property name
        key: String,
    },

    /// Set a property and write the UI state file
    Set {
        /// Property name
        key: String,
        /// Property value
        value: String,
    },

    /// Remove a property and write the UI state file
    Unset {
        /// Property name
        key: String,
    },
}

/// Arguments for configuration management
#[derive(clap::Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write the default configuration file
    Init {
        /// Replace an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Get a property value
    Get {
        /// Property name
        key: String,
    },
}

/// Output format
#[derive(ValueEnum, Clone, Debug, Default, PartialEq)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Text,

    /// JSON output
    Json,
}
