use std::time::Duration;

use serde_json::Value;

use crate::domain::{AppError, ServerLaunch};

pub trait LanguageClient {
    /// Spawn the server and complete the initialize handshake.
    fn start(&mut self, launch: &ServerLaunch) -> Result<(), AppError>;

    /// Shut the server down. Stopping a stopped client is a no-op.
    fn stop(&mut self) -> Result<(), AppError>;

    fn is_running(&self) -> bool;

    fn send_notification(&mut self, method: &str, params: Value) -> Result<(), AppError>;

    /// Wait for the next server notification named `method`.
    fn wait_notification(
        &mut self,
        method: &str,
        timeout: Duration,
    ) -> Result<Option<Value>, AppError>;
}
