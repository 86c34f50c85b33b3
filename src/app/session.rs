//! Long-lived host session: activation state plus the language client and
//! documentation terminal it owns.

use tracing::{info, warn};
use url::Url;

use crate::app::AppContext;
use crate::app::bootstrap::{self, Activation, ActivationReport};
use crate::domain::server::disabled_features;
use crate::domain::{AppError, ServerCommand, ServerLaunch, Settings};
use crate::ports::{Confirmer, Installer, LanguageClient, Notifier, ProcessRunner, TerminalHost};

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Inactive,
    Disabled,
    /// Activation stopped short (install declined); commands stay registered.
    Degraded(String),
    Ready(ActivationReport),
}

pub struct Session<C: LanguageClient, T: TerminalHost> {
    client: C,
    terminal: T,
    state: SessionState,
}

impl<C: LanguageClient, T: TerminalHost> Session<C, T> {
    pub fn new(client: C, terminal: T) -> Self {
        Self { client, terminal, state: SessionState::Inactive }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn report(&self) -> Option<&ActivationReport> {
        match &self.state {
            SessionState::Ready(report) => Some(report),
            _ => None,
        }
    }

    /// Report of a ready session, or `CommandUnavailable` naming `command`.
    pub fn require_ready(&self, command: &str) -> Result<&ActivationReport, AppError> {
        self.report().ok_or_else(|| AppError::CommandUnavailable(command.to_string()))
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn client_mut(&mut self) -> &mut C {
        &mut self.client
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut T {
        &mut self.terminal
    }

    /// Resolve tools and record the outcome.
    ///
    /// A declined install degrades the session instead of failing it. Any
    /// other error leaves the session inactive and is returned.
    pub fn activate<P, F, I, N>(
        &mut self,
        ctx: &AppContext<P, F, I, N>,
    ) -> Result<&SessionState, AppError>
    where
        P: ProcessRunner,
        F: Confirmer,
        I: Installer,
        N: Notifier,
    {
        self.state = match bootstrap::activate(ctx) {
            Ok(Activation::Disabled) => SessionState::Disabled,
            Ok(Activation::Ready(report)) => SessionState::Ready(report),
            Err(err) if err.is_degraded() => {
                warn!(error = %err, "activation degraded");
                ctx.notifier().warn(&err.to_string());
                SessionState::Degraded(err.to_string())
            }
            Err(err) => {
                self.state = SessionState::Inactive;
                return Err(err);
            }
        };
        Ok(&self.state)
    }

    /// Launch description for the current activation.
    pub fn launch(&self, settings: &Settings) -> Result<ServerLaunch, AppError> {
        let report = self.require_ready("ansible.server.start")?;
        Ok(ServerLaunch {
            command: ServerCommand::from_settings(settings, report.server_path_prefix.clone()),
            configuration: report.configuration.clone(),
            disabled_features: disabled_features(settings),
            root_uri: workspace_root_uri(),
        })
    }

    /// Start the language client, stopping a running one first.
    pub fn start_client(&mut self, settings: &Settings) -> Result<(), AppError> {
        let launch = self.launch(settings)?;
        if self.client.is_running() {
            self.client.stop()?;
        }
        info!(program = %launch.command.program.display(), "starting language server");
        self.client.start(&launch)
    }

    pub fn deactivate(&mut self) -> Result<(), AppError> {
        self.client.stop()?;
        self.terminal.dispose()?;
        self.state = SessionState::Inactive;
        Ok(())
    }

    /// Deactivate after an operation, reporting the operation's error before
    /// any teardown error.
    pub fn close<R>(&mut self, result: Result<R, AppError>) -> Result<R, AppError> {
        let teardown = self.deactivate();
        let value = result?;
        teardown?;
        Ok(value)
    }
}

fn workspace_root_uri() -> Option<String> {
    let cwd = std::env::current_dir().ok()?;
    Url::from_directory_path(cwd).ok().map(String::from)
}
