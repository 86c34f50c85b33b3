//! Shared testing utilities for ansible-bootstrap CLI tests.

use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SUCCEED: &str = "#!/bin/sh\nexit 0\n";
pub const FAIL: &str = "#!/bin/sh\nexit 1\n";

/// Python that creates a venv whose interpreter "installs" the tools on `-m pip`.
const VENV_PYTHON: &str = r#"#!/bin/sh
if [ "$1" = "-m" ] && [ "$2" = "pip" ]; then
  dir="${0%/*}"
  for tool in ansible ansible-lint ansible-doc; do
    printf '#!/bin/sh\nexit 0\n' > "$dir/$tool"
    /bin/chmod 755 "$dir/$tool"
  done
fi
exit 0
"#;

/// Isolated environment: a fake `PATH`, a storage directory, and a work directory.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    bin_dir: PathBuf,
    storage: PathBuf,
    fixtures: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        let bin_dir = root.path().join("bin");
        let storage = root.path().join("storage");
        let fixtures = root.path().join("fixtures");
        for dir in [&work_dir, &bin_dir, &fixtures] {
            fs::create_dir_all(dir).expect("Failed to create test directory");
        }

        Self { root, work_dir, bin_dir, storage, fixtures }
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub fn storage(&self) -> &Path {
        &self.storage
    }

    pub fn bin_dir(&self) -> &Path {
        &self.bin_dir
    }

    /// Build a command for the compiled binary with `PATH` limited to the fake bin dir.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("ansible-bootstrap").expect("Failed to locate ansible-bootstrap");
        cmd.current_dir(&self.work_dir)
            .env("PATH", &self.bin_dir)
            .env("HOME", self.root.path())
            .env_remove("RUST_LOG")
            .arg("--storage")
            .arg(&self.storage);
        cmd
    }

    /// Place an executable script named `name` on the fake `PATH`.
    pub fn add_tool(&self, name: &str, script: &str) -> PathBuf {
        let path = self.bin_dir.join(name);
        write_executable(&path, script);
        path
    }

    /// `python3` on `PATH` able to create a venv whose pip installs the tools.
    pub fn add_python(&self) -> PathBuf {
        let venv_python = self.fixtures.join("venv-python");
        write_executable(&venv_python, VENV_PYTHON);
        let script = format!(
            "#!/bin/sh\n\
             if [ \"$1\" = \"-m\" ] && [ \"$2\" = \"venv\" ]; then\n\
             \x20 /bin/mkdir -p \"$3/bin\" && /bin/cp \"{}\" \"$3/bin/python\" && /bin/chmod 755 \"$3/bin/python\"\n\
             \x20 exit $?\n\
             fi\n\
             exit 0\n",
            venv_python.display()
        );
        self.add_tool("python3", &script)
    }

    /// `ansible`, `ansible-lint`, and an `ansible-doc` that lists one module.
    pub fn add_system_tools(&self) {
        self.add_tool("ansible", SUCCEED);
        self.add_tool("ansible-lint", SUCCEED);
        self.add_tool(
            "ansible-doc",
            "#!/bin/sh\n\
             if [ \"$1\" = \"-l\" ]; then\n\
             \x20 printf '%s' '{\"ansible.builtin.copy\": \"Copy files to remote locations\"}'\n\
             fi\n\
             exit 0\n",
        );
    }

    /// Write `.ansible-bootstrap.toml` in the work directory.
    pub fn write_settings(&self, content: &str) {
        fs::write(self.work_dir.join(".ansible-bootstrap.toml"), content)
            .expect("Failed to write settings");
    }

    pub fn builtin_tool(&self, name: &str) -> PathBuf {
        self.storage.join("ansible/venv/bin").join(name)
    }
}

fn write_executable(path: &Path, script: &str) {
    fs::write(path, script).expect("Failed to write fake executable");
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .expect("Failed to mark fake executable");
}
