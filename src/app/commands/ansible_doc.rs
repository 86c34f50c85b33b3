//! `ansible-doc` browsing: list plugins of a type, then render one in a terminal.

use std::ffi::OsString;
use std::path::PathBuf;

use tracing::debug;

use crate::app::{AppContext, Session};
use crate::domain::plugin_doc::{list_args, parse_plugin_list};
use crate::domain::{AppError, DocView, PluginEntry};
use crate::ports::{Confirmer, Installer, LanguageClient, Notifier, ProcessRunner, TerminalHost};

/// Plugins of `plugin_type` known to `ansible-doc`.
///
/// A failing or unparsable listing yields an empty list.
pub fn list<P, F, I, N, C, T>(
    ctx: &AppContext<P, F, I, N>,
    session: &Session<C, T>,
    view: DocView,
    plugin_type: &str,
) -> Result<Vec<PluginEntry>, AppError>
where
    P: ProcessRunner,
    F: Confirmer,
    I: Installer,
    N: Notifier,
    C: LanguageClient,
    T: TerminalHost,
{
    view.validate_plugin_type(plugin_type)?;
    let doc_tool = doc_tool(session, view)?;
    let args: Vec<OsString> = list_args(plugin_type).into_iter().map(OsString::from).collect();

    match ctx.runner().run(&doc_tool, &args) {
        Ok(output) if output.success => Ok(parse_plugin_list(&output.stdout)),
        Ok(output) => {
            debug!(stderr = %output.stderr.trim(), "ansible-doc listing failed");
            Ok(Vec::new())
        }
        Err(err) => {
            debug!(error = %err, "ansible-doc listing could not start");
            Ok(Vec::new())
        }
    }
}

/// Render `plugin` in the documentation terminal, replacing any previous one.
pub fn show<C, T>(
    session: &mut Session<C, T>,
    view: DocView,
    plugin_type: &str,
    plugin: &str,
) -> Result<(), AppError>
where
    C: LanguageClient,
    T: TerminalHost,
{
    view.validate_plugin_type(plugin_type)?;
    let doc_tool = doc_tool(session, view)?;

    let terminal = session.terminal_mut();
    if terminal.is_open() {
        terminal.dispose()?;
    }
    terminal.open(view.terminal_name(), &doc_tool, &view.show_args(plugin_type, plugin))
}

fn doc_tool<C: LanguageClient, T: TerminalHost>(
    session: &Session<C, T>,
    view: DocView,
) -> Result<PathBuf, AppError> {
    let command = match view {
        DocView::Info => super::ANSIBLE_DOC_SHOW_INFO,
        DocView::Snippet => super::ANSIBLE_DOC_SHOW_SNIPPETS,
    };
    session
        .require_ready(command)?
        .doc_tool
        .clone()
        .ok_or_else(|| AppError::CommandUnavailable(command.to_string()))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::ports::ProcessOutput;
    use crate::testing::{
        FakeConfirmer, FakeInstaller, FakeLanguageClient, FakeTerminal, ready_session,
        test_context,
    };

    #[test]
    fn lists_plugins_from_json_output() {
        let (ready, session, dirs) = ready_session();
        let runner = ready.runner().clone().with_output(
            "ansible-doc -l -j -t lookup",
            ProcessOutput::succeeded(r#"{"ansible.builtin.file": "read file contents"}"#),
        );
        let ctx =
            test_context(runner, FakeConfirmer::accepting(), FakeInstaller::new(), dirs.1.path());

        let entries = list(&ctx, &session, DocView::Info, "lookup").unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].to_string(), "ansible.builtin.file: [read file contents]");
    }

    #[test]
    fn failed_listing_is_empty() {
        let (ctx, session, _dirs) = ready_session();

        assert!(list(&ctx, &session, DocView::Info, "module").unwrap().is_empty());
    }

    #[test]
    fn snippets_reject_unsupported_plugin_type() {
        let (ctx, session, _dirs) = ready_session();

        let err = list(&ctx, &session, DocView::Snippet, "callback").unwrap_err();
        assert!(matches!(err, AppError::UnsupportedPluginType { .. }));
        assert!(ctx.runner().calls().iter().all(|call| !call.contains("-l -j")));
    }

    #[test]
    fn show_replaces_previous_terminal() {
        let (_ctx, mut session, _dirs) = ready_session();

        show(&mut session, DocView::Info, "module", "ansible.builtin.copy").unwrap();
        show(&mut session, DocView::Snippet, "module", "ansible.builtin.file").unwrap();

        let terminal = session.terminal();
        assert_eq!(terminal.disposed, 1);
        let current = terminal.current().unwrap();
        assert_eq!(current.name, "ansibleDocShowSnippets");
        assert_eq!(current.program, Path::new("ansible-doc"));
        assert_eq!(current.args, vec!["-t", "module", "-s", "ansible.builtin.file"]);
    }

    #[test]
    fn inactive_session_has_no_doc_tool() {
        let mut session = Session::new(FakeLanguageClient::new(), FakeTerminal::new());

        assert!(matches!(
            show(&mut session, DocView::Info, "module", "copy"),
            Err(AppError::CommandUnavailable(_))
        ));
    }
}
