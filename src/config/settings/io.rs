// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::path::Path;

use crate::error::Result;
use crate::props::Properties;

use super::{default_config, DEFAULT_CONFIG_HEADER};

/// Load the user configuration. A missing file yields no properties.
pub fn load_user_config(path: &Path) -> Result<Properties> {
    Properties::read_from(path)
}

/// Read one property, re-reading the file so edits by other processes are seen.
pub fn config_property(path: &Path, name: &str) -> Option<String> {
    match load_user_config(path) {
        Ok(props) => props.get(name).map(str::to_string),
        Err(e) => {
            tracing::debug!("Unable to read config {}: {}", path.display(), e);
            None
        }
    }
}

/// Write the default user configuration, creating the parent folder if necessary.
pub fn write_default_config(path: &Path) -> Result<()> {
    default_config().write_to(path, DEFAULT_CONFIG_HEADER)?;
    tracing::debug!("Created user configuration file {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_default_config_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("system").join("TSTool.cfg");

        write_default_config(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with(
            "# TSTool configuration file containing user settings, shared between TSTool versions\n"
        ));
        assert!(content.contains("# User settings in this file will override the installation settings.\n\n"));
        assert!(content.ends_with("HydroBaseEnabled = true\n"));
    }

    #[test]
    fn test_config_property() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("TSTool.cfg");
        write_default_config(&path).unwrap();

        assert_eq!(
            config_property(&path, "HydroBaseEnabled").as_deref(),
            Some("true")
        );
        assert!(config_property(&path, "Missing").is_none());
    }

    #[test]
    fn test_config_property_sees_external_edits() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("TSTool.cfg");
        write_default_config(&path).unwrap();

        std::fs::write(&path, "HydroBaseEnabled = false\n").unwrap();
        assert_eq!(
            config_property(&path, "HydroBaseEnabled").as_deref(),
            Some("false")
        );
    }

    #[test]
    fn test_config_property_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        assert!(config_property(&temp_dir.path().join("none.cfg"), "HydroBaseEnabled").is_none());
    }
}
