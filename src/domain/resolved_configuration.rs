//! Configuration payload answered to the language server's `workspace/configuration` requests.

use std::path::Path;

use serde::Serialize;

use crate::domain::{Resolution, Settings, Tool};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfiguration {
    pub ansible: ResolvedAnsible,
    pub ansible_lint: ResolvedAnsibleLint,
    pub python: ResolvedPython,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedAnsible {
    pub path: String,
    pub use_fully_qualified_collection_names: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedAnsibleLint {
    pub enabled: bool,
    pub path: String,
    pub arguments: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPython {
    pub interpreter_path: String,
    pub activation_script: String,
}

impl ResolvedConfiguration {
    /// Apply the bootstrap policy to the user settings.
    ///
    /// Tool paths are always bare command names: the server runs either with
    /// the managed environment on its `PATH` or with an explicit interpreter.
    /// Linting is switched off whenever no lint capability was found through
    /// any path. The managed bin directory is prepended to the inherited
    /// `PATH`, so a system `ansible-lint` still counts there.
    pub fn derive(settings: &Settings, resolution: &Resolution, builtin_python: &Path) -> Self {
        let mut lint_enabled = settings.ansible_lint.enabled;
        let mut interpreter_path = settings
            .python
            .configured_interpreter()
            .map(|path| path.display().to_string())
            .unwrap_or_default();

        if let Some(modules) = &resolution.modules {
            if !modules.ansible_lint.is_available() {
                lint_enabled = false;
            }
        } else if resolution.uses_builtin() {
            interpreter_path = builtin_python.display().to_string();
            if resolution.builtin.ansible_lint.is_none()
                && !resolution.system.ansible_lint.is_available()
            {
                lint_enabled = false;
            }
        } else if !resolution.system.ansible_lint.is_available() {
            lint_enabled = false;
        }

        Self {
            ansible: ResolvedAnsible {
                path: Tool::Ansible.command_name().to_string(),
                use_fully_qualified_collection_names: settings
                    .ansible
                    .use_fully_qualified_collection_names,
            },
            ansible_lint: ResolvedAnsibleLint {
                enabled: lint_enabled,
                path: Tool::AnsibleLint.command_name().to_string(),
                arguments: settings.ansible_lint.arguments.clone(),
            },
            python: ResolvedPython {
                interpreter_path,
                activation_script: settings.python.activation_script.clone(),
            },
        }
    }
}
