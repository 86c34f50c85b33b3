/// Executable layout conventions of the host operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Posix,
    Windows,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(windows) { Platform::Windows } else { Platform::Posix }
    }

    /// Virtual-environment subdirectory that holds executables.
    pub fn bin_dir(self) -> &'static str {
        match self {
            Platform::Posix => "bin",
            Platform::Windows => "Scripts",
        }
    }

    pub fn executable_name(self, stem: &str) -> String {
        match self {
            Platform::Posix => stem.to_string(),
            Platform::Windows => format!("{stem}.exe"),
        }
    }
}
