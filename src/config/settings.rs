// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Session settings
//!
//! User settings live in `~/.tstool/<major>/system/TSTool.cfg`, a flat
//! property file that overrides the installation `TSTool.cfg`.

use std::path::Path;

use crate::history::DEFAULT_MAX_ENTRIES;
use crate::props::Properties;

mod io;

pub use io::{config_property, load_user_config, write_default_config};

/// Config property controlling the history cap
pub const HISTORY_MAX_PROPERTY: &str = "CommandFileHistoryMax";

/// Header comment lines of a newly created user configuration file
pub const DEFAULT_CONFIG_HEADER: &[&str] = &[
    "TSTool configuration file containing user settings, shared between TSTool versions",
    "This file indicates which datastore software features should be enabled.",
    "Disabling datastore types that are not used can improve TSTool performance and simplifies the user interface.",
    "Refer to the TSTool.cfg file under the software installation folder for global configuration properties.",
    "User settings in this file will override the installation settings.",
];

/// Options fixed when a session is opened
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Maximum number of command files kept in the history
    pub history_max: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            history_max: DEFAULT_MAX_ENTRIES,
        }
    }
}

impl SessionOptions {
    /// Options with any overrides found in the user configuration applied.
    pub fn from_config(config: &Properties) -> Self {
        let mut options = Self::default();

        if let Some(raw) = config.get(HISTORY_MAX_PROPERTY) {
            match raw.trim().parse::<usize>() {
                Ok(max) if max > 0 => options.history_max = max,
                _ => tracing::warn!(
                    "Ignoring {} = {:?}, expected a positive integer",
                    HISTORY_MAX_PROPERTY,
                    raw
                ),
            }
        }

        options
    }

    /// Options from the user configuration file, or defaults if it cannot be read.
    pub fn load(config_file: &Path) -> Self {
        match load_user_config(config_file) {
            Ok(props) => Self::from_config(&props),
            Err(e) => {
                tracing::warn!(
                    "Unable to read {}, using default options: {}",
                    config_file.display(),
                    e
                );
                Self::default()
            }
        }
    }

    pub fn with_history_max(mut self, history_max: usize) -> Self {
        self.history_max = history_max.max(1);
        self
    }
}

/// Default user configuration content.
pub fn default_config() -> Properties {
    // HydroBase often needs disabling on computers that do not use it
    Properties::parse("HydroBaseEnabled = true")
}
