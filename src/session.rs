// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! TSTool session
//!
//! A [`Session`] owns the user file layout for one major version together
//! with the command file history and the UI state. Callers normally build
//! one at startup and pass it around; [`get_or_create_session`] exists for
//! code that needs a process-wide instance.
//!
//! The session is best effort: reads degrade to empty results and folder
//! creation reports `false`, with the reason logged. Writes return a
//! [`Result`] so the caller can decide whether a failure matters.

use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use serde::Serialize;

use crate::config::{self, SessionOptions};
use crate::error::{Result, SessionError};
use crate::folders::{self, is_filesystem_root};
use crate::history::HistoryStore;
use crate::layout::{current_user_name, Layout};
use crate::props::Properties;
use crate::ui_state::UiStateStore;

static SESSION: OnceLock<Arc<Session>> = OnceLock::new();

/// Return the process-wide session, creating it with `major_version` on first use.
///
/// Later calls return the same session whatever version they pass, and
/// re-run [`Session::initialize_user_files`], which is idempotent.
pub fn get_or_create_session(major_version: u32) -> Arc<Session> {
    let session = SESSION.get_or_init(|| {
        if major_version == 0 {
            tracing::warn!("Creating session with major version 0");
        }
        Arc::new(Session::open(major_version))
    });
    if session.major_version() != major_version {
        tracing::debug!(
            "Session already open for version {}, ignoring {}",
            session.major_version(),
            major_version
        );
    }
    session.initialize_user_files();
    Arc::clone(session)
}

/// Session state for one user and major version
#[derive(Debug)]
pub struct Session {
    layout: Layout,
    options: SessionOptions,
    history: HistoryStore,
    ui_state: UiStateStore,
}

/// Resolved user file locations
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionPaths {
    pub major_version: u32,
    pub user_folder: PathBuf,
    pub major_version_folder: PathBuf,
    pub datastores_folder: PathBuf,
    pub logs_folder: PathBuf,
    pub plugins_folder: PathBuf,
    pub system_folder: PathBuf,
    pub config_file: PathBuf,
    pub log_file: PathBuf,
    pub history_file: PathBuf,
    pub ui_state_file: PathBuf,
    pub graph_template_folder: PathBuf,
}

impl Session {
    /// Open a session under the current user's home directory.
    pub fn open(major_version: u32) -> Self {
        Self::with_home(Layout::resolve_home(), major_version)
    }

    /// Open a session under an explicit home directory.
    ///
    /// Options come from the user configuration file when it exists.
    pub fn with_home(home: impl Into<PathBuf>, major_version: u32) -> Self {
        let layout = Layout::new(home, major_version);
        let options = SessionOptions::load(&layout.config_file());
        Self::with_options(layout, options)
    }

    /// Open a session with explicit options. The UI state file is read here.
    pub fn with_options(layout: Layout, options: SessionOptions) -> Self {
        let history = HistoryStore::new(layout.history_file(), options.history_max);
        let ui_state = UiStateStore::open(layout.ui_state_file());
        Self {
            layout,
            options,
            history,
            ui_state,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub fn major_version(&self) -> u32 {
        self.layout.major_version()
    }

    pub fn user_folder(&self) -> PathBuf {
        self.layout.user_folder()
    }

    pub fn major_version_folder(&self) -> PathBuf {
        self.layout.major_version_folder()
    }

    pub fn datastores_folder(&self) -> PathBuf {
        self.layout.datastores_folder()
    }

    pub fn logs_folder(&self) -> PathBuf {
        self.layout.logs_folder()
    }

    pub fn plugins_folder(&self) -> PathBuf {
        self.layout.plugins_folder()
    }

    pub fn system_folder(&self) -> PathBuf {
        self.layout.system_folder()
    }

    pub fn config_file(&self) -> PathBuf {
        self.layout.config_file()
    }

    pub fn history_file(&self) -> PathBuf {
        self.layout.history_file()
    }

    pub fn ui_state_file(&self) -> PathBuf {
        self.layout.ui_state_file()
    }

    /// Log file for the current OS user.
    pub fn log_file(&self) -> PathBuf {
        self.layout.log_file(&current_user_name())
    }

    /// All resolved locations, for display.
    pub fn paths(&self) -> SessionPaths {
        SessionPaths {
            major_version: self.major_version(),
            user_folder: self.user_folder(),
            major_version_folder: self.major_version_folder(),
            datastores_folder: self.datastores_folder(),
            logs_folder: self.logs_folder(),
            plugins_folder: self.plugins_folder(),
            system_folder: self.system_folder(),
            config_file: self.config_file(),
            log_file: self.log_file(),
            history_file: self.history_file(),
            ui_state_file: self.ui_state_file(),
            graph_template_folder: self.layout.graph_template_folder(),
        }
    }

    /// True when the home directory is the filesystem root, where no user files are written.
    pub fn is_rooted_at_filesystem_root(&self) -> bool {
        is_filesystem_root(self.layout.home())
    }

    fn check_not_root(&self) -> Result<()> {
        if self.is_rooted_at_filesystem_root() {
            return Err(SessionError::RootFolder(self.layout.home().to_path_buf()));
        }
        Ok(())
    }

    fn ensure_user_folder(&self, folder: &Path) -> bool {
        if let Err(e) = self.check_not_root() {
            tracing::warn!("Not creating {}: {}", folder.display(), e);
            return false;
        }
        folders::ensure_folder(folder)
    }

    /// Create the version folder and the folders below it.
    ///
    /// Returns `false` when the home is the filesystem root or the version
    /// folder cannot be created or written. Failures on the subfolders are
    /// logged but do not change the result.
    pub fn initialize_user_files(&self) -> bool {
        if let Err(e) = self.check_not_root() {
            tracing::warn!("Unable to create user files, run as a normal user: {}", e);
            return false;
        }

        let version_folder = self.major_version_folder();
        if let Err(e) = folders::try_ensure_folder(&version_folder) {
            tracing::warn!(
                "Could not use user files version folder {}: {}",
                version_folder.display(),
                e
            );
            return false;
        }

        self.create_datastores_folder();
        self.create_logs_folder();
        self.create_plugins_folder();
        self.create_system_folder();
        true
    }

    pub fn create_datastores_folder(&self) -> bool {
        self.ensure_user_folder(&self.datastores_folder())
    }

    pub fn create_logs_folder(&self) -> bool {
        self.ensure_user_folder(&self.logs_folder())
    }

    pub fn create_plugins_folder(&self) -> bool {
        self.ensure_user_folder(&self.plugins_folder())
    }

    pub fn create_system_folder(&self) -> bool {
        self.ensure_user_folder(&self.system_folder())
    }

    /// Write the default user configuration file.
    ///
    /// Returns `false` when the file cannot be written, including when the
    /// home is the filesystem root. An existing file is replaced.
    pub fn create_config_file(&self) -> bool {
        let path = self.config_file();
        let result = self
            .check_not_root()
            .and_then(|()| config::write_default_config(&path));
        match result {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Unable to create {}: {}", path.display(), e);
                false
            }
        }
    }

    /// Read one property from the user configuration file.
    pub fn config_property(&self, name: &str) -> Option<String> {
        config::config_property(&self.config_file(), name)
    }

    /// Command files opened recently, newest first. Empty on any failure.
    pub fn read_history(&self) -> Vec<String> {
        self.history.read()
    }

    /// Record that `command_file` was opened.
    pub fn push_history(&self, command_file: &str) -> Result<()> {
        if command_file.trim().is_empty()
            || command_file.starts_with('#')
            || command_file.contains(['\n', '\r'])
        {
            return Err(SessionError::InvalidInput(format!(
                "not a command file path: {:?}",
                command_file
            )));
        }
        self.check_not_root()
            .and_then(|()| self.history.push(command_file).map(|_| ()))
            .inspect_err(|e| tracing::warn!("Unable to update command file history: {}", e))
    }

    /// Remove every history entry.
    pub fn clear_history(&self) -> Result<()> {
        self.check_not_root()
            .and_then(|()| self.history.clear())
            .inspect_err(|e| tracing::warn!("Unable to clear command file history: {}", e))
    }

    /// Reload the UI state from its file, discarding unsaved changes.
    pub fn read_ui_state(&self) {
        self.ui_state.read();
    }

    /// Write the UI state to its file.
    pub fn write_ui_state(&self) -> Result<()> {
        self.check_not_root()
            .and_then(|()| self.ui_state.write())
            .inspect_err(|e| tracing::warn!("Unable to write UI state: {}", e))
    }

    pub fn ui_state_property(&self, name: &str) -> Option<String> {
        self.ui_state.get(name)
    }

    /// Set a UI state property in memory. Call [`write_ui_state`](Self::write_ui_state) to persist.
    pub fn set_ui_state_property(&self, name: &str, value: &str) -> Result<()> {
        self.ui_state.set(name, value)
    }

    pub fn remove_ui_state_property(&self, name: &str) -> Option<String> {
        self.ui_state.remove(name)
    }

    pub fn ui_state_properties(&self) -> Properties {
        self.ui_state.snapshot()
    }

    /// Full path of a graph template given its bare file name.
    pub fn graph_template_file(&self, tsp_filename: &str) -> PathBuf {
        self.layout.graph_template_file(tsp_filename)
    }

    /// `*.tsp` graph templates, sorted by path. Empty if the folder is missing.
    pub fn graph_template_files(&self) -> Vec<PathBuf> {
        let folder = self.layout.graph_template_folder();
        if !folder.is_dir() {
            return Vec::new();
        }

        let escaped = glob::Pattern::escape(&folder.to_string_lossy());
        let pattern = format!("{}/*.tsp", escaped);
        let mut files: Vec<PathBuf> = match glob::glob(&pattern) {
            Ok(paths) => paths
                .filter_map(|entry| entry.ok())
                .filter(|path| path.is_file())
                .collect(),
            Err(e) => {
                tracing::warn!("Bad graph template pattern {}: {}", pattern, e);
                Vec::new()
            }
        };
        files.sort();
        files
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_session(temp_dir: &TempDir) -> Session {
        Session::with_home(temp_dir.path(), 14)
    }

    #[test]
    fn test_paths_under_home() {
        let temp_dir = TempDir::new().unwrap();
        let session = test_session(&temp_dir);

        let paths = session.paths();
        assert_eq!(paths.major_version, 14);
        assert_eq!(paths.user_folder, temp_dir.path().join(".tstool"));
        assert_eq!(paths.config_file, temp_dir.path().join(".tstool/14/system/TSTool.cfg"));
        assert!(paths.log_file.starts_with(temp_dir.path().join(".tstool/14/logs")));
    }

    #[test]
    fn test_opening_session_does_no_folder_io() {
        let temp_dir = TempDir::new().unwrap();
        let _session = test_session(&temp_dir);
        assert!(!temp_dir.path().join(".tstool").exists());
    }

    #[test]
    fn test_initialize_user_files() {
        let temp_dir = TempDir::new().unwrap();
        let session = test_session(&temp_dir);

        assert!(session.initialize_user_files());
        for folder in session.layout().version_subfolders() {
            assert!(folder.is_dir(), "{} missing", folder.display());
        }
        // Idempotent
        assert!(session.initialize_user_files());
    }

    #[test]
    fn test_root_home_refused() {
        let session = Session::with_options(Layout::new("/", 14), SessionOptions::default());

        assert!(session.is_rooted_at_filesystem_root());
        assert!(!session.initialize_user_files());
        assert!(!session.create_logs_folder());
        assert!(!session.create_config_file());
        assert!(matches!(
            session.push_history("/a.tstool"),
            Err(SessionError::RootFolder(_))
        ));
        assert!(matches!(
            session.write_ui_state(),
            Err(SessionError::RootFolder(_))
        ));
    }

    #[test]
    fn test_create_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let session = test_session(&temp_dir);

        assert!(session.create_config_file());
        assert!(session.config_file().exists());
        assert_eq!(session.config_property("HydroBaseEnabled").as_deref(), Some("true"));
    }

    #[test]
    fn test_history_max_from_config() {
        let temp_dir = TempDir::new().unwrap();
        let layout = Layout::new(temp_dir.path(), 14);
        std::fs::create_dir_all(layout.system_folder()).unwrap();
        std::fs::write(layout.config_file(), "CommandFileHistoryMax = 2\n").unwrap();

        let session = Session::with_home(temp_dir.path(), 14);
        assert_eq!(session.options().history_max, 2);

        for name in ["/a", "/b", "/c"] {
            session.push_history(name).unwrap();
        }
        assert_eq!(session.read_history(), vec!["/c", "/b"]);
    }

    #[test]
    fn test_push_history_rejects_blank_and_comment() {
        let temp_dir = TempDir::new().unwrap();
        let session = test_session(&temp_dir);

        assert!(session.push_history("").is_err());
        assert!(session.push_history("   ").is_err());
        assert!(session.push_history("# not a file").is_err());
        assert!(session.read_history().is_empty());
    }

    #[test]
    fn test_push_history_rejects_line_breaks() {
        let temp_dir = TempDir::new().unwrap();
        let session = test_session(&temp_dir);

        assert!(matches!(
            session.push_history("/x.tstool\n/y.tstool"),
            Err(SessionError::InvalidInput(_))
        ));
        assert!(session.push_history("/x.tstool\r").is_err());
        assert!(session.read_history().is_empty());

        session.push_history("/x.tstool").unwrap();
        assert_eq!(session.read_history(), vec!["/x.tstool"]);
    }

    #[test]
    fn test_clear_history() {
        let temp_dir = TempDir::new().unwrap();
        let session = test_session(&temp_dir);

        session.push_history("/a").unwrap();
        session.clear_history().unwrap();
        assert!(session.read_history().is_empty());
    }

    #[test]
    fn test_ui_state_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let session = test_session(&temp_dir);

        session.set_ui_state_property("Main.LastFolder", "/data").unwrap();
        session.write_ui_state().unwrap();

        let reopened = test_session(&temp_dir);
        assert_eq!(
            reopened.ui_state_property("Main.LastFolder").as_deref(),
            Some("/data")
        );
        assert_eq!(reopened.ui_state_properties().len(), 1);
    }

    #[test]
    fn test_ui_state_shared_between_versions() {
        let temp_dir = TempDir::new().unwrap();
        let v14 = Session::with_home(temp_dir.path(), 14);
        v14.set_ui_state_property("K", "V").unwrap();
        v14.write_ui_state().unwrap();

        let v15 = Session::with_home(temp_dir.path(), 15);
        assert_eq!(v15.ui_state_property("K").as_deref(), Some("V"));
    }

    #[test]
    fn test_graph_template_files() {
        let temp_dir = TempDir::new().unwrap();
        let session = test_session(&temp_dir);
        assert!(session.graph_template_files().is_empty());

        let folder = session.layout().graph_template_folder();
        std::fs::create_dir_all(&folder).unwrap();
        std::fs::write(folder.join("b.tsp"), "").unwrap();
        std::fs::write(folder.join("a.tsp"), "").unwrap();
        std::fs::write(folder.join("notes.txt"), "").unwrap();

        let files = session.graph_template_files();
        assert_eq!(files, vec![folder.join("a.tsp"), folder.join("b.tsp")]);
        assert_eq!(session.graph_template_file("a.tsp"), folder.join("a.tsp"));
    }
}
