pub mod child_terminal;
pub mod console_notifier;
pub mod dialoguer_confirmer;
pub mod server_process_client;
pub mod system_process;
pub mod venv_installer;

pub use child_terminal::ChildTerminal;
pub use console_notifier::ConsoleNotifier;
pub use dialoguer_confirmer::PromptConfirmer;
pub use server_process_client::ServerProcessClient;
pub use system_process::SystemProcessRunner;
pub use venv_installer::VenvInstaller;
