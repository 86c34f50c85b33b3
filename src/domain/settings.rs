//! User settings consumed by the bootstrap, loaded from `.ansible-bootstrap.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Root settings section. Keys mirror the editor extension's `ansible.*` namespace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Settings {
    /// Master switch; a disabled extension skips activation entirely.
    #[serde(default = "default_true")]
    pub enable: bool,
    #[serde(default)]
    pub ansible: AnsibleSettings,
    #[serde(default)]
    pub ansible_lint: AnsibleLintSettings,
    #[serde(default)]
    pub ansible_doc: AnsibleDocSettings,
    #[serde(default)]
    pub python: PythonSettings,
    #[serde(default)]
    pub builtin: BuiltinSettings,
    #[serde(default)]
    pub dev: DevSettings,
    /// Disable work-done progress reporting from the language server.
    #[serde(default)]
    pub disable_progress_notifications: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enable: true,
            ansible: AnsibleSettings::default(),
            ansible_lint: AnsibleLintSettings::default(),
            ansible_doc: AnsibleDocSettings::default(),
            python: PythonSettings::default(),
            builtin: BuiltinSettings::default(),
            dev: DevSettings::default(),
            disable_progress_notifications: false,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), AppError> {
        for (key, value) in [
            ("ansible.path", &self.ansible.path),
            ("ansibleLint.path", &self.ansible_lint.path),
            ("ansibleDoc.path", &self.ansible_doc.path),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::config_error(format!("{key} must not be empty")));
            }
        }
        self.builtin.validate()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AnsibleSettings {
    #[serde(default = "default_ansible_path")]
    pub path: String,
    #[serde(default = "default_true")]
    pub use_fully_qualified_collection_names: bool,
}

impl Default for AnsibleSettings {
    fn default() -> Self {
        Self { path: default_ansible_path(), use_fully_qualified_collection_names: true }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AnsibleLintSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_ansible_lint_path")]
    pub path: String,
    #[serde(default)]
    pub arguments: String,
}

impl Default for AnsibleLintSettings {
    fn default() -> Self {
        Self { enabled: true, path: default_ansible_lint_path(), arguments: String::new() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AnsibleDocSettings {
    #[serde(default = "default_ansible_doc_path")]
    pub path: String,
    /// Open documentation beside the current window. Only meaningful to editor hosts.
    #[serde(default = "default_true")]
    pub enable_split_right: bool,
}

impl Default for AnsibleDocSettings {
    fn default() -> Self {
        Self { path: default_ansible_doc_path(), enable_split_right: true }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PythonSettings {
    #[serde(default)]
    pub interpreter_path: Option<PathBuf>,
    #[serde(default)]
    pub activation_script: String,
}

impl PythonSettings {
    /// Explicit interpreter override. An empty string counts as unset.
    pub fn configured_interpreter(&self) -> Option<&Path> {
        self.interpreter_path.as_deref().filter(|path| !path.as_os_str().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BuiltinSettings {
    /// Prefer the managed virtual environment even when system tools exist.
    #[serde(default)]
    pub force: bool,
    #[serde(default)]
    pub is_with_yamllint: bool,
    #[serde(default)]
    pub ansible_version: Option<String>,
    #[serde(default)]
    pub ansible_lint_version: Option<String>,
    #[serde(default)]
    pub yamllint_version: Option<String>,
    /// Also probe `ansible-doc` alongside `ansible` and `ansible-lint`.
    #[serde(default = "default_true")]
    pub probe_ansible_doc: bool,
}

impl Default for BuiltinSettings {
    fn default() -> Self {
        Self {
            force: false,
            is_with_yamllint: false,
            ansible_version: None,
            ansible_lint_version: None,
            yamllint_version: None,
            probe_ansible_doc: true,
        }
    }
}

impl BuiltinSettings {
    pub fn validate(&self) -> Result<(), AppError> {
        for (key, version) in [
            ("builtin.ansibleVersion", &self.ansible_version),
            ("builtin.ansibleLintVersion", &self.ansible_lint_version),
            ("builtin.yamllintVersion", &self.yamllint_version),
        ] {
            let Some(version) = version else { continue };
            // Versions are spliced into pip requirement specifiers.
            if version.chars().any(|c| c.is_whitespace() || matches!(c, ';' | '=' | '<' | '>')) {
                return Err(AppError::config_error(format!(
                    "{key} must be a plain version string, got '{version}'"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DevSettings {
    /// Development build of the language server entry script.
    #[serde(default)]
    pub server_path: Option<PathBuf>,
}

/// Parse and validate settings from TOML content.
pub fn parse_settings_content(content: &str) -> Result<Settings, AppError> {
    let settings: Settings = toml::from_str(content)?;
    settings.validate()?;
    Ok(settings)
}

fn default_true() -> bool {
    true
}

fn default_ansible_path() -> String {
    "ansible".to_string()
}

fn default_ansible_lint_path() -> String {
    "ansible-lint".to_string()
}

fn default_ansible_doc_path() -> String {
    "ansible-doc".to_string()
}
