//! Provisioning steps for the managed virtual environment.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::domain::{BuiltinSettings, Platform, venv_paths};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPlan {
    /// Interpreter used to create the environment.
    pub interpreter: PathBuf,
    pub venv_dir: PathBuf,
    pub bin_dir: PathBuf,
    pub venv_python: PathBuf,
    /// pip requirement specifiers, in install order.
    pub packages: Vec<String>,
}

impl InstallPlan {
    pub fn new(
        interpreter: &Path,
        storage: &Path,
        platform: Platform,
        builtin: &BuiltinSettings,
    ) -> Self {
        let mut packages = vec![
            requirement("ansible", builtin.ansible_version.as_deref()),
            requirement("ansible-lint", builtin.ansible_lint_version.as_deref()),
        ];
        if builtin.is_with_yamllint {
            packages.push(requirement("yamllint", builtin.yamllint_version.as_deref()));
        }

        Self {
            interpreter: interpreter.to_path_buf(),
            venv_dir: venv_paths::venv_dir(storage),
            bin_dir: venv_paths::venv_bin_dir(storage, platform),
            venv_python: venv_paths::builtin_python(storage, platform),
            packages,
        }
    }

    /// `<interpreter> -m venv <venv_dir>`
    pub fn create_venv_args(&self) -> Vec<OsString> {
        vec!["-m".into(), "venv".into(), self.venv_dir.clone().into_os_string()]
    }

    /// `<venv python> -m pip install -U pip <packages...>`
    pub fn pip_install_args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> =
            ["-m", "pip", "install", "-U", "pip"].into_iter().map(OsString::from).collect();
        args.extend(self.packages.iter().map(OsString::from));
        args
    }
}

fn requirement(name: &str, version: Option<&str>) -> String {
    match version.filter(|v| !v.is_empty()) {
        Some(version) => format!("{name}=={version}"),
        None => name.to_string(),
    }
}
