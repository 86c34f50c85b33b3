//! Layout of the managed virtual environment under the storage root.

use std::path::{Path, PathBuf};

use crate::domain::{Platform, Tool};

/// `<storage>/ansible/venv`
pub fn venv_dir(storage: &Path) -> PathBuf {
    storage.join("ansible").join("venv")
}

/// `<storage>/ansible/venv/{bin|Scripts}`
pub fn venv_bin_dir(storage: &Path, platform: Platform) -> PathBuf {
    venv_dir(storage).join(platform.bin_dir())
}

/// Expected location of a managed tool. Existence is not checked here.
pub fn builtin_tool(storage: &Path, tool: Tool, platform: Platform) -> PathBuf {
    venv_bin_dir(storage, platform).join(platform.executable_name(tool.command_name()))
}

pub fn builtin_python(storage: &Path, platform: Platform) -> PathBuf {
    venv_bin_dir(storage, platform).join(platform.executable_name("python"))
}
