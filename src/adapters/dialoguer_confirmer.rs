use std::io::{self, ErrorKind, IsTerminal};

use dialoguer::{Confirm, Error as DialoguerError};
use tracing::warn;

use crate::domain::AppError;
use crate::ports::Confirmer;

/// Yes/no prompt on the controlling terminal.
#[derive(Debug, Clone, Copy)]
pub enum PromptConfirmer {
    Interactive,
    /// Answer every prompt with the given value (`--yes`).
    Assume(bool),
}

impl Confirmer for PromptConfirmer {
    fn confirm(&self, message: &str) -> Result<bool, AppError> {
        match self {
            PromptConfirmer::Assume(answer) => Ok(*answer),
            PromptConfirmer::Interactive => {
                if !io::stderr().is_terminal() {
                    warn!(prompt = message, "no terminal to confirm on; answering no");
                    return Ok(false);
                }
                match Confirm::new().with_prompt(message).default(false).interact() {
                    Ok(answer) => Ok(answer),
                    Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => {
                        Ok(false)
                    }
                    Err(err) => Err(AppError::Prompt(err.to_string())),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assumed_answers_skip_the_prompt() {
        assert!(PromptConfirmer::Assume(true).confirm("Install?").unwrap());
        assert!(!PromptConfirmer::Assume(false).confirm("Install?").unwrap());
    }
}
