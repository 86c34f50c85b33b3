use std::collections::VecDeque;
use std::time::Duration;

use serde_json::Value;

use crate::domain::{AppError, ServerLaunch};
use crate::ports::LanguageClient;

#[derive(Default)]
pub struct FakeLanguageClient {
    running: bool,
    pub launches: Vec<ServerLaunch>,
    pub stops: usize,
    pub sent: Vec<(String, Value)>,
    pub incoming: VecDeque<(String, Value)>,
    /// Make `stop` fail, as a server that never acknowledges shutdown would.
    pub fail_stop: bool,
}

impl FakeLanguageClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a notification the "server" will emit.
    pub fn push_incoming(&mut self, method: &str, params: Value) {
        self.incoming.push_back((method.to_string(), params));
    }
}

impl LanguageClient for FakeLanguageClient {
    fn start(&mut self, launch: &ServerLaunch) -> Result<(), AppError> {
        self.launches.push(launch.clone());
        self.running = true;
        Ok(())
    }

    fn stop(&mut self) -> Result<(), AppError> {
        if self.fail_stop {
            return Err(AppError::LanguageServer("shutdown was not acknowledged".to_string()));
        }
        if self.running {
            self.stops += 1;
        }
        self.running = false;
        Ok(())
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn send_notification(&mut self, method: &str, params: Value) -> Result<(), AppError> {
        if !self.running {
            return Err(AppError::LanguageServer("client is not running".to_string()));
        }
        self.sent.push((method.to_string(), params));
        Ok(())
    }

    fn wait_notification(
        &mut self,
        method: &str,
        _timeout: Duration,
    ) -> Result<Option<Value>, AppError> {
        let position = self.incoming.iter().position(|(m, _)| m == method);
        Ok(position.and_then(|index| self.incoming.remove(index)).map(|(_, params)| params))
    }
}
