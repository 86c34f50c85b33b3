pub mod error;
pub mod install_plan;
pub mod platform;
pub mod plugin_doc;
pub mod python;
pub mod resolution;
pub mod resolved_configuration;
pub mod server;
pub mod settings;
pub mod tool;
pub mod venv_paths;

pub use error::AppError;
pub use install_plan::InstallPlan;
pub use platform::Platform;
pub use plugin_doc::{DocView, PluginEntry};
pub use python::{PYTHON_CANDIDATES, PythonPaths};
pub use resolution::{BuiltinToolPaths, ModuleAvailability, Resolution, ToolAvailability};
pub use resolved_configuration::ResolvedConfiguration;
pub use server::{ServerCommand, ServerLaunch};
pub use settings::{
    AnsibleDocSettings, AnsibleLintSettings, AnsibleSettings, BuiltinSettings, DevSettings,
    PythonSettings, Settings,
};
pub use tool::{Availability, Tool};
