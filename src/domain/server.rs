//! Language server launch description and custom protocol names.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use url::Url;

use crate::domain::{AppError, ResolvedConfiguration, Settings};

/// Server executable installed by the `@ansible/ansible-language-server` package.
pub const DEFAULT_SERVER_COMMAND: &str = "ansible-language-server";
/// Configuration section the server requests.
pub const CONFIGURATION_SECTION: &str = "ansible";
/// Server replies with the collected Ansible metadata for a document.
pub const METADATA_NOTIFICATION: &str = "update/ansible-metadata";
/// Asks the server to reload the inventory.
pub const RESYNC_INVENTORY_NOTIFICATION: &str = "resync/ansible-inventory";
pub const PROGRESS_FEATURE: &str = "progress";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerCommand {
    pub program: PathBuf,
    pub args: Vec<OsString>,
    /// Directory prepended to the child's `PATH`.
    pub path_prefix: Option<PathBuf>,
}

impl ServerCommand {
    /// Development builds under `dev.serverPath` run through node; anything else
    /// uses the installed server command.
    pub fn from_settings(settings: &Settings, path_prefix: Option<PathBuf>) -> Self {
        match settings.dev.server_path.as_deref().filter(|path| path.is_file()) {
            Some(script) => Self {
                program: PathBuf::from("node"),
                args: vec![script.as_os_str().to_owned(), "--stdio".into()],
                path_prefix,
            },
            None => Self {
                program: PathBuf::from(DEFAULT_SERVER_COMMAND),
                args: vec!["--stdio".into()],
                path_prefix,
            },
        }
    }
}

/// Everything a language client needs to start the server.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerLaunch {
    pub command: ServerCommand,
    pub configuration: ResolvedConfiguration,
    pub disabled_features: Vec<String>,
    pub root_uri: Option<String>,
}

impl ServerLaunch {
    pub fn is_feature_disabled(&self, feature: &str) -> bool {
        self.disabled_features.iter().any(|f| f == feature)
    }
}

pub fn disabled_features(settings: &Settings) -> Vec<String> {
    let mut features = Vec::new();
    if settings.disable_progress_notifications {
        features.push(PROGRESS_FEATURE.to_string());
    }
    features
}

/// Playbooks and roles are YAML documents.
pub fn is_ansible_document(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yml") || ext.eq_ignore_ascii_case("yaml"))
}

pub fn document_uri(path: &Path) -> Result<String, AppError> {
    let absolute =
        if path.is_absolute() { path.to_path_buf() } else { std::env::current_dir()?.join(path) };
    Url::from_file_path(&absolute).map(String::from).map_err(|_| {
        AppError::config_error(format!("Cannot build a file URI for {}", absolute.display()))
    })
}
