use std::io;

use thiserror::Error;

/// Library-wide error type for ansible-bootstrap operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Explicitly requested settings file does not exist.
    #[error("Settings file not found: {0}")]
    SettingsNotFound(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// JSON encoding or decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Tool name is not one of the managed tools.
    #[error("Unknown tool '{0}': must be one of ansible, ansible-lint, ansible-doc")]
    UnknownTool(String),

    /// Plugin type is not supported for the requested documentation view.
    #[error("Unsupported plugin type '{plugin_type}' for {view}. Available: {available}")]
    UnsupportedPluginType { plugin_type: String, view: String, available: String },

    /// External process could not be started.
    #[error("Failed to run '{command}': {details}")]
    ProcessSpawn { command: String, details: String },

    /// No Python interpreter could be resolved.
    #[error("python3/python command not found")]
    InterpreterMissing,

    /// No usable `ansible` after system, builtin, and install strategies.
    #[error("\"ansible\" is not found. Please install \"ansible\".")]
    ToolMissing,

    /// Configured interpreter cannot import the `ansible` module.
    #[error("Exit because \"ansible\" does not exist (interpreter: {0})")]
    AnsibleModuleMissing(String),

    /// User declined the install prompt.
    #[error("Installation of Ansible Server requirements tools was declined")]
    InstallDeclined,

    /// Provisioning subprocess failed.
    #[error("Ansible Server requirements tools: install failed. | '{command}': {details}")]
    InstallFailed { command: String, details: String },

    /// Another installation is still running.
    #[error("An installation of Ansible Server requirements tools is already in progress")]
    InstallInProgress,

    /// Interactive prompt failed.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// Language server process or protocol failure.
    #[error("Language server error: {0}")]
    LanguageServer(String),

    /// Command cannot run in the current session state.
    #[error("Command '{0}' is not available in the current session")]
    CommandUnavailable(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Whether the error leaves the session usable in a degraded state.
    pub fn is_degraded(&self) -> bool {
        matches!(self, AppError::InstallDeclined)
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::TomlParseError(_)
            | AppError::Json(_)
            | AppError::UnknownTool(_)
            | AppError::UnsupportedPluginType { .. } => io::ErrorKind::InvalidInput,
            AppError::SettingsNotFound(_)
            | AppError::InterpreterMissing
            | AppError::ToolMissing
            | AppError::AnsibleModuleMissing(_)
            | AppError::ProcessSpawn { .. } => io::ErrorKind::NotFound,
            AppError::InstallDeclined | AppError::Prompt(_) => io::ErrorKind::Interrupted,
            AppError::InstallInProgress => io::ErrorKind::WouldBlock,
            AppError::InstallFailed { .. }
            | AppError::LanguageServer(_)
            | AppError::CommandUnavailable(_) => io::ErrorKind::Other,
        }
    }
}
