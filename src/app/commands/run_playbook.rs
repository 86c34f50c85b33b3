use std::fmt;

use crate::domain::AppError;
use crate::ports::Notifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybookRunner {
    AnsiblePlaybook,
    AnsibleNavigator,
}

impl fmt::Display for PlaybookRunner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybookRunner::AnsiblePlaybook => f.write_str("ansible-playbook"),
            PlaybookRunner::AnsibleNavigator => f.write_str("ansible-navigator"),
        }
    }
}

/// Placeholder: running playbooks is not supported yet.
pub fn execute<N: Notifier>(notifier: &N, runner: PlaybookRunner) -> Result<(), AppError> {
    notifier.info(&format!("{runner}: Not implemented in ansible-bootstrap"));
    Ok(())
}
