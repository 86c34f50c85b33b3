//! API Facade for the application.
//!
//! Glues settings loading, real adapters, and command execution together for
//! the command-line host.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde_json::Value;

use crate::adapters::{
    ChildTerminal, ConsoleNotifier, PromptConfirmer, ServerProcessClient, SystemProcessRunner,
    VenvInstaller,
};
use crate::app::commands::run_playbook::PlaybookRunner;
use crate::app::commands::{
    ansible_doc, install_requirements_tools, run_playbook as playbook, server_restart,
    server_resync_inventory, server_show_metadata,
};
use crate::app::config::{default_storage, load_settings};
use crate::app::{AppContext, Session, SessionState};
use crate::domain::{AppError, DocView, PluginEntry};

pub use crate::app::bootstrap::ActivationReport;

type HostContext = AppContext<
    SystemProcessRunner,
    PromptConfirmer,
    VenvInstaller<SystemProcessRunner>,
    ConsoleNotifier,
>;
type HostSession = Session<ServerProcessClient, ChildTerminal>;

/// Where settings and the managed environment come from.
#[derive(Debug, Clone, Default)]
pub struct HostOptions {
    pub settings_path: Option<PathBuf>,
    pub storage: Option<PathBuf>,
    /// Answer the install prompt with yes.
    pub assume_yes: bool,
}

fn create_context(options: &HostOptions) -> Result<HostContext, AppError> {
    let work_dir = std::env::current_dir()?;
    let settings = load_settings(options.settings_path.as_deref(), &work_dir)?;
    let storage = match &options.storage {
        Some(path) => path.clone(),
        None => default_storage()?,
    };
    let confirmer = if options.assume_yes {
        PromptConfirmer::Assume(true)
    } else {
        PromptConfirmer::Interactive
    };

    Ok(AppContext::new(
        SystemProcessRunner::new(),
        confirmer,
        VenvInstaller::new(SystemProcessRunner::new()),
        ConsoleNotifier,
        settings,
        storage,
    ))
}

fn new_session() -> HostSession {
    Session::new(ServerProcessClient::new(), ChildTerminal::new())
}

/// Activate against a live language server, run `f`, then shut everything down.
fn with_running_server<R>(
    options: &HostOptions,
    f: impl FnOnce(&HostContext, &mut HostSession) -> Result<R, AppError>,
) -> Result<R, AppError> {
    let ctx = create_context(options)?;
    let mut session = new_session();
    session.activate(&ctx)?;
    session.start_client(ctx.settings())?;
    let result = f(&ctx, &mut session);
    session.close(result)
}

/// Resolve tools, installing the managed environment if needed.
pub fn resolve(options: &HostOptions) -> Result<SessionState, AppError> {
    let ctx = create_context(options)?;
    let mut session = new_session();
    Ok(session.activate(&ctx)?.clone())
}

/// (Re)install the managed environment, then resolve again.
pub fn install(options: &HostOptions) -> Result<SessionState, AppError> {
    let ctx = create_context(options)?;
    let mut session = new_session();
    install_requirements_tools::execute(&ctx, &mut session)?;
    Ok(session.state().clone())
}

/// Start the language server, complete the handshake, and shut it down.
pub fn check_server(options: &HostOptions) -> Result<(), AppError> {
    with_running_server(options, |_, _| Ok(()))
}

/// Start the language server, restart it once, and shut it down.
pub fn restart_server(options: &HostOptions) -> Result<(), AppError> {
    with_running_server(options, |ctx, session| server_restart::execute(session, ctx.settings()))
}

/// Metadata the language server collected for `document`.
pub fn show_metadata(
    options: &HostOptions,
    document: &Path,
    timeout: Duration,
) -> Result<Option<Value>, AppError> {
    with_running_server(options, |_, session| {
        server_show_metadata::execute(session, document, timeout)
    })
}

/// Ask the language server to reload the inventory.
pub fn resync_inventory(options: &HostOptions, document: &Path) -> Result<bool, AppError> {
    with_running_server(options, |_, session| {
        server_resync_inventory::execute(session, document)
    })
}

pub fn doc_list(
    options: &HostOptions,
    view: DocView,
    plugin_type: &str,
) -> Result<Vec<PluginEntry>, AppError> {
    let ctx = create_context(options)?;
    let mut session = new_session();
    session.activate(&ctx)?;
    ansible_doc::list(&ctx, &session, view, plugin_type)
}

/// Render one plugin's documentation on this terminal and wait for it.
pub fn doc_show(
    options: &HostOptions,
    view: DocView,
    plugin_type: &str,
    plugin: &str,
) -> Result<(), AppError> {
    let ctx = create_context(options)?;
    let mut session = new_session();
    session.activate(&ctx)?;
    ansible_doc::show(&mut session, view, plugin_type, plugin)?;
    session.terminal_mut().wait()
}

pub fn run_playbook(runner: PlaybookRunner) -> Result<(), AppError> {
    playbook::execute(&ConsoleNotifier, runner)
}
