mod confirmer;
mod installer;
mod language_client;
mod notifier;
mod process_runner;
mod terminal_host;

pub use confirmer::Confirmer;
pub use installer::Installer;
pub use language_client::LanguageClient;
pub use notifier::Notifier;
pub use process_runner::{ProcessOutput, ProcessRunner, display_command};
pub use terminal_host::TerminalHost;
