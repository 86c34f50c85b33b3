//! Activation-time tool resolution and provisioning.
//!
//! One activation walks: interpreter lookup, system probes, managed
//! environment lookup, optional install, and finally derives the
//! configuration for the language server. Probes never fail the activation;
//! only the decision points below do.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{info, warn};

use crate::app::AppContext;
use crate::app::tool_resolver::ToolResolver;
use crate::domain::{
    AppError, BuiltinToolPaths, InstallPlan, ModuleAvailability, PythonPaths, Resolution,
    ResolvedConfiguration, ToolAvailability, venv_paths,
};
use crate::ports::{Confirmer, Installer, Notifier, ProcessRunner};

pub const INSTALL_PROMPT: &str = "Install Ansible Server requirements tools?";

/// Result of a successful activation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivationReport {
    pub python: Option<PythonPaths>,
    pub resolution: Resolution,
    pub configuration: ResolvedConfiguration,
    /// `ansible-doc` used by the documentation commands.
    pub doc_tool: Option<PathBuf>,
    /// Managed environment bin directory to put on the server's `PATH`.
    pub server_path_prefix: Option<PathBuf>,
}

impl ActivationReport {
    pub fn can_install(&self) -> bool {
        self.python.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Activation {
    /// `enable = false` in the settings.
    Disabled,
    Ready(ActivationReport),
}

/// Run one full resolution.
pub fn activate<P, F, I, N>(ctx: &AppContext<P, F, I, N>) -> Result<Activation, AppError>
where
    P: ProcessRunner,
    F: Confirmer,
    I: Installer,
    N: Notifier,
{
    let settings = ctx.settings();
    if !settings.enable {
        info!("ansible support disabled by settings");
        return Ok(Activation::Disabled);
    }

    fs::create_dir_all(ctx.storage())?;

    let resolver = ctx.resolver();
    let configured = settings.python.configured_interpreter();
    let python = resolver.resolve_python_interpreter(configured);
    if python.is_none() && configured.is_none() {
        return Err(AppError::InterpreterMissing);
    }

    let system = resolver.probe_system_tools(settings);
    info!(
        python_env = %display_opt(python.as_ref().map(|p| p.env.as_path())),
        python_real = %display_opt(python.as_ref().map(|p| p.real.as_path())),
        interpreter_override = %display_opt(configured),
        ansible = %system.ansible,
        ansible_lint = %system.ansible_lint,
        ansible_doc = %system.ansible_doc,
        force_builtin = settings.builtin.force,
        "environment"
    );

    let resolution = match configured {
        Some(interpreter) => resolve_with_interpreter(&resolver, interpreter, system)?,
        None => resolve_with_tools(ctx, python.as_ref(), system)?,
    };

    let builtin_python = venv_paths::builtin_python(ctx.storage(), ctx.platform());
    let configuration = ResolvedConfiguration::derive(settings, &resolution, &builtin_python);
    let server_path_prefix = resolution
        .uses_builtin()
        .then(|| venv_paths::venv_bin_dir(ctx.storage(), ctx.platform()));
    let doc_tool = resolution.doc_tool(&settings.ansible_doc.path);

    Ok(Activation::Ready(ActivationReport {
        python,
        resolution,
        configuration,
        doc_tool,
        server_path_prefix,
    }))
}

/// Ask for confirmation, then provision the managed environment once.
///
/// The install is never retried; a failure is returned to the caller as-is.
pub fn install_requirements<P, F, I, N>(
    ctx: &AppContext<P, F, I, N>,
    python: &PythonPaths,
) -> Result<(), AppError>
where
    P: ProcessRunner,
    F: Confirmer,
    I: Installer,
    N: Notifier,
{
    let _ticket = ctx.install_gate().begin()?;

    if !ctx.confirmer().confirm(INSTALL_PROMPT)? {
        info!("requirements tools install declined");
        return Err(AppError::InstallDeclined);
    }

    let plan = InstallPlan::new(&python.real, ctx.storage(), ctx.platform(), &ctx.settings().builtin);
    info!(
        interpreter = %plan.interpreter.display(),
        venv = %plan.venv_dir.display(),
        packages = ?plan.packages,
        "installing requirements tools"
    );

    let notifier = ctx.notifier();
    notifier.info("Install Ansible Server requirements tools...");
    let started = Instant::now();
    let result =
        with_progress(notifier, ctx.progress_interval(), || ctx.installer().install(&plan));
    let elapsed = started.elapsed().as_secs();

    match result {
        Ok(()) => {
            info!(elapsed_secs = elapsed, "requirements tools installed");
            notifier.info(&format!("ansible | Installation is complete! ({elapsed} sec)"));
            Ok(())
        }
        Err(AppError::ProcessSpawn { command, details }) => {
            warn!(%command, %details, "requirements tools install failed");
            Err(AppError::InstallFailed { command, details })
        }
        Err(err) => {
            warn!(error = %err, "requirements tools install failed");
            Err(err)
        }
    }
}

fn resolve_with_tools<P, F, I, N>(
    ctx: &AppContext<P, F, I, N>,
    python: Option<&PythonPaths>,
    mut system: ToolAvailability,
) -> Result<Resolution, AppError>
where
    P: ProcessRunner,
    F: Confirmer,
    I: Installer,
    N: Notifier,
{
    let settings = ctx.settings();
    let resolver = ctx.resolver();

    let mut builtin = BuiltinToolPaths::default();
    if system.needs_builtin() || settings.builtin.force {
        builtin = resolver.locate_builtin_tools(ctx.storage());
        log_builtin(&builtin);
    }

    if !system.ansible.is_available() && !builtin.is_usable() {
        let python = python.ok_or(AppError::InterpreterMissing)?;
        install_requirements(ctx, python)?;

        system = resolver.probe_system_tools(settings);
        builtin = resolver.locate_builtin_tools(ctx.storage());
        log_builtin(&builtin);

        if !system.ansible.is_available() && !builtin.is_usable() {
            return Err(AppError::ToolMissing);
        }
    }

    Ok(Resolution { system, builtin, modules: None })
}

fn resolve_with_interpreter<P: ProcessRunner>(
    resolver: &ToolResolver<'_, P>,
    interpreter: &Path,
    system: ToolAvailability,
) -> Result<Resolution, AppError> {
    let modules = ModuleAvailability {
        ansible: resolver.probe_python_module(interpreter, "ansible"),
        ansible_lint: resolver.probe_python_module(interpreter, "ansiblelint"),
    };
    info!(
        interpreter = %interpreter.display(),
        ansible_module = %modules.ansible,
        ansible_lint_module = %modules.ansible_lint,
        "using configured interpreter"
    );

    if !modules.ansible.is_available() {
        return Err(AppError::AnsibleModuleMissing(interpreter.display().to_string()));
    }

    Ok(Resolution { system, builtin: BuiltinToolPaths::default(), modules: Some(modules) })
}

/// Run `work` while a ticker thread reports elapsed time every `interval`.
///
/// The ticker stops when `work` returns, fails, or unwinds: dropping the
/// sender disconnects the channel it waits on.
fn with_progress<N: Notifier, R>(notifier: &N, interval: Duration, work: impl FnOnce() -> R) -> R {
    let started = Instant::now();
    let (done, finished) = mpsc::channel::<()>();

    thread::scope(|scope| {
        scope.spawn(move || {
            while let Err(RecvTimeoutError::Timeout) = finished.recv_timeout(interval) {
                notifier.warn(&format!(
                    "ansible | Install requirements tools... ({} sec)",
                    started.elapsed().as_secs()
                ));
            }
        });

        let result = work();
        drop(done);
        result
    })
}

fn log_builtin(builtin: &BuiltinToolPaths) {
    if builtin.is_usable() {
        info!(
            ansible = %display_opt(builtin.ansible.as_deref()),
            ansible_lint = %display_opt(builtin.ansible_lint.as_deref()),
            ansible_doc = %display_opt(builtin.ansible_doc.as_deref()),
            "using builtin tools"
        );
    }
}

fn display_opt(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string()).unwrap_or_else(|| "None".to_string())
}
