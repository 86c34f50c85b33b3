use crate::app::Session;
use crate::domain::{AppError, Settings};
use crate::ports::{LanguageClient, TerminalHost};

/// Stop the language client and start it again with the current activation.
pub fn execute<C, T>(session: &mut Session<C, T>, settings: &Settings) -> Result<(), AppError>
where
    C: LanguageClient,
    T: TerminalHost,
{
    session.require_ready(super::SERVER_RESTART)?;
    session.client_mut().stop()?;
    session.start_client(settings)
}
