use tracing::info;

use crate::app::{AppContext, Session, bootstrap};
use crate::domain::AppError;
use crate::ports::{Confirmer, Installer, LanguageClient, Notifier, ProcessRunner, TerminalHost};

/// Reinstall the managed environment on demand, then re-run activation.
///
/// A running language client is stopped for the duration of the install and
/// started again afterwards, whether or not the install succeeded.
pub fn execute<P, F, I, N, C, T>(
    ctx: &AppContext<P, F, I, N>,
    session: &mut Session<C, T>,
) -> Result<(), AppError>
where
    P: ProcessRunner,
    F: Confirmer,
    I: Installer,
    N: Notifier,
    C: LanguageClient,
    T: TerminalHost,
{
    let python = match session.report().and_then(|report| report.python.clone()) {
        Some(python) => python,
        None => ctx
            .resolver()
            .resolve_python_interpreter(ctx.settings().python.configured_interpreter())
            .ok_or(AppError::InterpreterMissing)?,
    };

    let was_running = session.client().is_running();
    if was_running {
        session.client_mut().stop()?;
    }

    let installed = bootstrap::install_requirements(ctx, &python);
    if installed.is_ok() {
        info!("re-running activation after install");
        session.activate(ctx)?;
    }

    if was_running && session.report().is_some() {
        session.start_client(ctx.settings())?;
    }
    installed
}
