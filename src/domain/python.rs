use std::path::PathBuf;

use serde::Serialize;

/// Commands searched on `PATH` when no interpreter is configured, in order.
pub const PYTHON_CANDIDATES: [&str; 2] = ["python3", "python"];

/// Python interpreter as found and as resolved through symlinks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PythonPaths {
    pub env: PathBuf,
    pub real: PathBuf,
}
