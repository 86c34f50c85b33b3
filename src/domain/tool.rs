use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::AppError;

/// External command-line tools managed by the bootstrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    Ansible,
    AnsibleLint,
    AnsibleDoc,
}

impl Tool {
    pub const ALL: [Tool; 3] = [Tool::Ansible, Tool::AnsibleLint, Tool::AnsibleDoc];

    pub fn command_name(self) -> &'static str {
        match self {
            Tool::Ansible => "ansible",
            Tool::AnsibleLint => "ansible-lint",
            Tool::AnsibleDoc => "ansible-doc",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command_name())
    }
}

impl FromStr for Tool {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tool::ALL
            .into_iter()
            .find(|tool| tool.command_name() == s)
            .ok_or_else(|| AppError::UnknownTool(s.to_string()))
    }
}

/// Outcome of a fail-soft probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Available,
    #[default]
    Unavailable,
}

impl Availability {
    pub fn from_success(success: bool) -> Self {
        if success { Availability::Available } else { Availability::Unavailable }
    }

    pub fn is_available(self) -> bool {
        self == Availability::Available
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Availability::Available => f.write_str("available"),
            Availability::Unavailable => f.write_str("unavailable"),
        }
    }
}
