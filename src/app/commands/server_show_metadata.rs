use std::path::Path;
use std::time::Duration;

use serde_json::{Value, json};
use tracing::debug;

use crate::app::Session;
use crate::domain::AppError;
use crate::domain::server::{METADATA_NOTIFICATION, document_uri, is_ansible_document};
use crate::ports::{LanguageClient, TerminalHost};

/// Ask the server for the metadata it collected for `document` and wait for the reply.
///
/// Returns `Ok(None)` for non-Ansible documents and when the server stays silent.
pub fn execute<C, T>(
    session: &mut Session<C, T>,
    document: &Path,
    timeout: Duration,
) -> Result<Option<Value>, AppError>
where
    C: LanguageClient,
    T: TerminalHost,
{
    session.require_ready(super::SERVER_SHOW_METADATA)?;
    if !is_ansible_document(document) {
        debug!(document = %document.display(), "not an ansible document");
        return Ok(None);
    }

    let uri = document_uri(document)?;
    let client = session.client_mut();
    client.send_notification(METADATA_NOTIFICATION, json!([uri]))?;
    client.wait_notification(METADATA_NOTIFICATION, timeout)
}
