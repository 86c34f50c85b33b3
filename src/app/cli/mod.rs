//! CLI Adapter.

mod doc;
mod server;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::app::SessionState;
use crate::app::api::{self, ActivationReport, HostOptions};
use crate::app::commands::run_playbook::PlaybookRunner;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "ansible-bootstrap")]
#[command(version)]
#[command(
    about = "Resolve and provision Ansible tooling for the Ansible language server",
    long_about = None
)]
struct Cli {
    /// Settings file (default: ./.ansible-bootstrap.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Storage directory holding the managed environment
    #[arg(long, global = true)]
    storage: Option<PathBuf>,
    /// Answer yes to the install prompt
    #[arg(short, long, global = true)]
    yes: bool,
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve tools and print the language server configuration
    #[clap(visible_alias = "r")]
    Resolve {
        /// Print the full activation report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Install Ansible Server requirements tools into the managed environment
    #[clap(visible_alias = "i")]
    Install,
    /// Talk to the Ansible language server
    #[clap(visible_alias = "s")]
    Server {
        #[command(subcommand)]
        command: server::ServerCommands,
    },
    /// Browse plugin documentation with ansible-doc
    #[clap(visible_alias = "d")]
    Doc {
        #[command(subcommand)]
        command: doc::DocCommands,
    },
    /// Run a playbook with ansible-playbook
    RunPlaybook {
        /// Use ansible-navigator instead of ansible-playbook
        #[arg(long)]
        navigator: bool,
    },
}

pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options =
        HostOptions { settings_path: cli.config, storage: cli.storage, assume_yes: cli.yes };

    let result: Result<i32, AppError> = match cli.command {
        Commands::Resolve { json } => run_resolve(&options, json),
        Commands::Install => run_install(&options),
        Commands::Server { command } => server::run_server(&options, command).map(|_| 0),
        Commands::Doc { command } => doc::run_doc(&options, command).map(|_| 0),
        Commands::RunPlaybook { navigator } => {
            let runner = if navigator {
                PlaybookRunner::AnsibleNavigator
            } else {
                PlaybookRunner::AnsiblePlaybook
            };
            api::run_playbook(runner).map(|_| 0)
        }
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ansible_bootstrap={default_level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run_resolve(options: &HostOptions, json: bool) -> Result<i32, AppError> {
    let state = api::resolve(options)?;
    print_state(&state, json)
}

fn run_install(options: &HostOptions) -> Result<i32, AppError> {
    let state = api::install(options)?;
    print_state(&state, false)
}

fn print_state(state: &SessionState, json: bool) -> Result<i32, AppError> {
    match state {
        SessionState::Ready(report) if json => {
            println!("{}", serde_json::to_string_pretty(report)?);
            Ok(0)
        }
        SessionState::Ready(report) => {
            print_report(report);
            Ok(0)
        }
        SessionState::Disabled => {
            println!("Ansible support is disabled by settings (enable = false)");
            Ok(0)
        }
        SessionState::Degraded(reason) => {
            println!("⚠️  Activation incomplete: {reason}");
            println!("   Run `ansible-bootstrap install` to provision the tools.");
            Ok(2)
        }
        SessionState::Inactive => Ok(1),
    }
}

fn print_report(report: &ActivationReport) {
    let configuration = &report.configuration;
    println!("✅ Ansible language server configuration resolved");
    if let Some(python) = &report.python {
        println!("  python:            {}", python.env.display());
    }
    println!("  ansible.path:      {}", configuration.ansible.path);
    println!(
        "  ansibleLint:       {} ({})",
        configuration.ansible_lint.path,
        if configuration.ansible_lint.enabled { "enabled" } else { "disabled" }
    );
    if !configuration.python.interpreter_path.is_empty() {
        println!("  interpreterPath:   {}", configuration.python.interpreter_path);
    }
    if let Some(prefix) = &report.server_path_prefix {
        println!("  builtin tools:     {}", prefix.display());
    }
    match &report.doc_tool {
        Some(doc_tool) => println!("  ansible-doc:       {}", doc_tool.display()),
        None => println!("  ansible-doc:       unavailable"),
    }
}
