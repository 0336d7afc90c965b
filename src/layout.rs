// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! User file layout
//!
//! Resolves every TSTool user file and folder from a home directory and a
//! major software version. Nothing here touches the filesystem.
//!
//! ```text
//! <home>/.tstool/
//!   command-file-history.txt
//!   ui-state.txt
//!   template-graph/*.tsp
//!   <major>/
//!     datastores/
//!     logs/TSTool_<user>.log
//!     plugins/
//!     system/TSTool.cfg
//! ```

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Name of the per-user folder below the home directory
pub const USER_FOLDER_NAME: &str = ".tstool";

/// Environment variable overriding the home directory
pub const HOME_ENV: &str = "TSTOOL_HOME";

/// Resolved paths for one home directory and major version
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layout {
    home: PathBuf,
    major_version: u32,
}

impl Layout {
    /// Create a layout rooted at an explicit home directory
    pub fn new(home: impl Into<PathBuf>, major_version: u32) -> Self {
        Self {
            home: home.into(),
            major_version,
        }
    }

    /// Create a layout rooted at the resolved user home directory
    pub fn for_current_user(major_version: u32) -> Self {
        Self::new(Self::resolve_home(), major_version)
    }

    /// Get the home directory ($TSTOOL_HOME, else the OS home, else `.`).
    pub fn resolve_home() -> PathBuf {
        if let Ok(home) = std::env::var(HOME_ENV) {
            if !home.is_empty() {
                return PathBuf::from(home);
            }
        }
        dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn major_version(&self) -> u32 {
        self.major_version
    }

    /// `<home>/.tstool`
    pub fn user_folder(&self) -> PathBuf {
        self.home.join(USER_FOLDER_NAME)
    }

    /// `<home>/.tstool/<major>`
    pub fn major_version_folder(&self) -> PathBuf {
        self.user_folder().join(self.major_version.to_string())
    }

    /// Datastore configuration folder.
    pub fn datastores_folder(&self) -> PathBuf {
        self.major_version_folder().join("datastores")
    }

    /// Log file folder.
    pub fn logs_folder(&self) -> PathBuf {
        self.major_version_folder().join("logs")
    }

    /// Plugin jar folder.
    pub fn plugins_folder(&self) -> PathBuf {
        self.major_version_folder().join("plugins")
    }

    /// System folder, holding the user configuration file.
    pub fn system_folder(&self) -> PathBuf {
        self.major_version_folder().join("system")
    }

    /// User configuration file.
    pub fn config_file(&self) -> PathBuf {
        self.system_folder().join("TSTool.cfg")
    }

    /// Log file for the given user name.
    pub fn log_file(&self, user_name: &str) -> PathBuf {
        self.logs_folder().join(format!("TSTool_{}.log", user_name))
    }

    /// Command file history, shared between major versions.
    pub fn history_file(&self) -> PathBuf {
        self.user_folder().join("command-file-history.txt")
    }

    /// UI state file, shared between major versions.
    pub fn ui_state_file(&self) -> PathBuf {
        self.user_folder().join("ui-state.txt")
    }

    pub fn graph_template_folder(&self) -> PathBuf {
        self.user_folder().join("template-graph")
    }

    /// Full path of a graph template given its bare file name.
    pub fn graph_template_file(&self, tsp_filename: &str) -> PathBuf {
        self.graph_template_folder().join(tsp_filename)
    }

    /// The four folders created under the major version folder.
    pub fn version_subfolders(&self) -> [PathBuf; 4] {
        [
            self.datastores_folder(),
            self.logs_folder(),
            self.plugins_folder(),
            self.system_folder(),
        ]
    }
}

/// Name of the current OS user, used for the log file name.
pub fn current_user_name() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .ok()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
