//! Settings loading from the working directory or an explicit path.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::settings::parse_settings_content;
use crate::domain::{AppError, Settings};

/// Settings file looked up in the working directory.
pub const SETTINGS_FILE: &str = ".ansible-bootstrap.toml";

const STORAGE_DIR: &str = "ansible-bootstrap";

/// Load settings from `explicit`, or from `SETTINGS_FILE` in `work_dir`.
///
/// A missing default file means default settings; a missing explicit file is an error.
pub fn load_settings(explicit: Option<&Path>, work_dir: &Path) -> Result<Settings, AppError> {
    let path = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(AppError::SettingsNotFound(path.display().to_string()));
            }
            path.to_path_buf()
        }
        None => {
            let path = work_dir.join(SETTINGS_FILE);
            if !path.is_file() {
                debug!(path = %path.display(), "no settings file, using defaults");
                return Ok(Settings::default());
            }
            path
        }
    };

    debug!(path = %path.display(), "loading settings");
    let content = fs::read_to_string(&path)?;
    parse_settings_content(&content)
}

/// Per-user data directory holding the managed environment.
pub fn default_storage() -> Result<PathBuf, AppError> {
    dirs::data_dir().map(|dir| dir.join(STORAGE_DIR)).ok_or_else(|| {
        AppError::config_error("Cannot determine the user data directory; pass --storage")
    })
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn missing_default_file_yields_defaults() {
        let dir = TempDir::new().unwrap();

        assert_eq!(load_settings(None, dir.path()).unwrap(), Settings::default());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");

        assert!(matches!(
            load_settings(Some(&path), dir.path()),
            Err(AppError::SettingsNotFound(_))
        ));
    }

    #[test]
    fn reads_default_file_from_work_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(SETTINGS_FILE),
            "[ansibleLint]\nenabled = false\n\n[builtin]\nforce = true\n",
        )
        .unwrap();

        let settings = load_settings(None, dir.path()).unwrap();

        assert!(!settings.ansible_lint.enabled);
        assert!(settings.builtin.force);
    }

    #[test]
    fn explicit_file_wins_over_work_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(SETTINGS_FILE), "enable = false\n").unwrap();
        let explicit = dir.path().join("other.toml");
        fs::write(&explicit, "[ansible]\npath = \"/opt/ansible/bin/ansible\"\n").unwrap();

        let settings = load_settings(Some(&explicit), dir.path()).unwrap();

        assert!(settings.enable);
        assert_eq!(settings.ansible.path, "/opt/ansible/bin/ansible");
    }

    #[test]
    fn invalid_version_is_rejected() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(SETTINGS_FILE), "[builtin]\nansibleVersion = \"9; rm -rf\"\n")
            .unwrap();

        assert!(matches!(load_settings(None, dir.path()), Err(AppError::Configuration(_))));
    }
}
