//! Probe results gathered during one activation.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{Availability, Tool};

/// System commands found on the search path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolAvailability {
    pub ansible: Availability,
    pub ansible_lint: Availability,
    pub ansible_doc: Availability,
}

impl ToolAvailability {
    /// Whether the managed environment has to be consulted.
    pub fn needs_builtin(&self) -> bool {
        !self.ansible.is_available() || !self.ansible_lint.is_available()
    }
}

/// Tools present in the managed virtual environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuiltinToolPaths {
    pub ansible: Option<PathBuf>,
    pub ansible_lint: Option<PathBuf>,
    pub ansible_doc: Option<PathBuf>,
}

impl BuiltinToolPaths {
    /// The managed environment counts as usable iff `ansible` exists in it.
    pub fn is_usable(&self) -> bool {
        self.ansible.is_some()
    }

    pub fn get(&self, tool: Tool) -> Option<&Path> {
        match tool {
            Tool::Ansible => self.ansible.as_deref(),
            Tool::AnsibleLint => self.ansible_lint.as_deref(),
            Tool::AnsibleDoc => self.ansible_doc.as_deref(),
        }
    }

    pub fn set(&mut self, tool: Tool, path: Option<PathBuf>) {
        match tool {
            Tool::Ansible => self.ansible = path,
            Tool::AnsibleLint => self.ansible_lint = path,
            Tool::AnsibleDoc => self.ansible_doc = path,
        }
    }
}

/// Importable modules of an explicitly configured interpreter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleAvailability {
    pub ansible: Availability,
    pub ansible_lint: Availability,
}

/// Everything the activation learned about the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    pub system: ToolAvailability,
    pub builtin: BuiltinToolPaths,
    /// Present only when `python.interpreterPath` is configured.
    pub modules: Option<ModuleAvailability>,
}

impl Resolution {
    /// Whether the language server should run against the managed environment.
    ///
    /// Only when no system installation exists; `builtin.force` widens the
    /// builtin lookup but never replaces a working system install.
    pub fn uses_builtin(&self) -> bool {
        self.modules.is_none() && self.builtin.is_usable() && !self.system.ansible.is_available()
    }

    /// `ansible-doc` executable to use for documentation commands, if any.
    pub fn doc_tool(&self, configured: &str) -> Option<PathBuf> {
        if self.system.ansible.is_available() {
            Some(PathBuf::from(configured))
        } else {
            self.builtin.ansible_doc.clone()
        }
    }
}
