mod fake_confirmer;
mod fake_installer;
mod fake_language_client;
mod fake_process_runner;
mod fake_terminal;
mod recording_notifier;

use std::fs;
use std::path::Path;

use tempfile::TempDir;

pub use fake_confirmer::FakeConfirmer;
pub use fake_installer::FakeInstaller;
pub use fake_language_client::FakeLanguageClient;
pub use fake_process_runner::FakeProcessRunner;
pub use fake_terminal::FakeTerminal;
pub use recording_notifier::{Level, RecordingNotifier};

use crate::app::{AppContext, Session};
use crate::domain::Settings;

pub type TestContext =
    AppContext<FakeProcessRunner, FakeConfirmer, FakeInstaller, RecordingNotifier>;

/// Context over fakes with the default settings.
pub fn test_context(
    runner: FakeProcessRunner,
    confirmer: FakeConfirmer,
    installer: FakeInstaller,
    storage: &Path,
) -> TestContext {
    test_context_with(runner, confirmer, installer, Settings::default(), storage)
}

pub fn test_context_with(
    runner: FakeProcessRunner,
    confirmer: FakeConfirmer,
    installer: FakeInstaller,
    settings: Settings,
    storage: &Path,
) -> TestContext {
    AppContext::new(runner, confirmer, installer, RecordingNotifier::new(), settings, storage)
}

pub type ReadySession =
    (TestContext, Session<FakeLanguageClient, FakeTerminal>, (TempDir, TempDir));

/// A session activated against system `ansible`, `ansible-lint` and `ansible-doc`.
///
/// The temp dirs (interpreter dir, storage) must outlive the context.
pub fn ready_session() -> ReadySession {
    let bin = TempDir::new().unwrap();
    let storage = TempDir::new().unwrap();
    let python = bin.path().join("python3");
    fs::write(&python, "").unwrap();
    let runner = FakeProcessRunner::new()
        .with_executable("python3", &python)
        .with_command("ansible -h", true)
        .with_command("ansible-lint -h", true)
        .with_command("ansible-doc -h", true);
    let ctx = test_context(runner, FakeConfirmer::accepting(), FakeInstaller::new(), storage.path());
    let mut session = Session::new(FakeLanguageClient::new(), FakeTerminal::new());
    session.activate(&ctx).unwrap();
    (ctx, session, (bin, storage))
}
