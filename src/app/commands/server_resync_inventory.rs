use std::path::Path;

use serde_json::Value;

use crate::app::Session;
use crate::domain::AppError;
use crate::domain::server::{RESYNC_INVENTORY_NOTIFICATION, is_ansible_document};
use crate::ports::{LanguageClient, TerminalHost};

/// Ask the server to reload the inventory. Returns whether a request was sent.
pub fn execute<C, T>(session: &mut Session<C, T>, document: &Path) -> Result<bool, AppError>
where
    C: LanguageClient,
    T: TerminalHost,
{
    session.require_ready(super::SERVER_RESYNC_INVENTORY)?;
    if !is_ansible_document(document) {
        return Ok(false);
    }
    session.client_mut().send_notification(RESYNC_INVENTORY_NOTIFICATION, Value::Null)?;
    Ok(true)
}
