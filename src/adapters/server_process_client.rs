//! Language client speaking JSON-RPC to `ansible-language-server --stdio`.
//!
//! A reader thread owns the server's stdout. It answers configuration
//! requests itself and forwards every other message to the client.

use std::collections::VecDeque;
use std::env;
use std::io::{BufReader, BufWriter, Write};
use std::process::{Child, ChildStdin, Command, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use lsp_server::{Message, Notification, Request, RequestId, Response};
use serde_json::{Value, json};
use tracing::{debug, trace, warn};

use crate::domain::server::{CONFIGURATION_SECTION, PROGRESS_FEATURE};
use crate::domain::{AppError, ResolvedConfiguration, ServerLaunch};
use crate::ports::LanguageClient;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(2);

type SharedWriter = Arc<Mutex<BufWriter<ChildStdin>>>;

#[derive(Default)]
pub struct ServerProcessClient {
    running: Option<Running>,
}

struct Running {
    child: Child,
    writer: SharedWriter,
    incoming: Receiver<Message>,
    reader: JoinHandle<()>,
    pending: VecDeque<Notification>,
    next_id: i32,
}

impl ServerProcessClient {
    pub fn new() -> Self {
        Self::default()
    }

    fn running(&mut self) -> Result<&mut Running, AppError> {
        self.running
            .as_mut()
            .ok_or_else(|| AppError::LanguageServer("client is not running".to_string()))
    }
}

impl LanguageClient for ServerProcessClient {
    fn start(&mut self, launch: &ServerLaunch) -> Result<(), AppError> {
        self.stop()?;

        let command = &launch.command;
        let mut process = Command::new(&command.program);
        process
            .args(&command.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null());
        if let Some(prefix) = &command.path_prefix {
            let mut paths = vec![prefix.clone()];
            if let Some(existing) = env::var_os("PATH") {
                paths.extend(env::split_paths(&existing));
            }
            let joined = env::join_paths(paths)
                .map_err(|e| AppError::LanguageServer(format!("Invalid PATH entry: {e}")))?;
            process.env("PATH", joined);
        }

        debug!(program = %command.program.display(), args = ?command.args, "spawning language server");
        let mut child = process.spawn().map_err(|e| AppError::ProcessSpawn {
            command: command.program.display().to_string(),
            details: e.to_string(),
        })?;
        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| AppError::LanguageServer("Failed to get server stdin".to_string()))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| AppError::LanguageServer("Failed to get server stdout".to_string()))?;

        let writer: SharedWriter = Arc::new(Mutex::new(BufWriter::new(stdin)));
        let (sender, incoming) = mpsc::channel();
        let reader = spawn_reader(
            BufReader::new(stdout),
            Arc::clone(&writer),
            sender,
            launch.configuration.clone(),
        );

        let mut running =
            Running { child, writer, incoming, reader, pending: VecDeque::new(), next_id: 0 };
        if let Err(err) = running.initialize(launch) {
            running.terminate();
            return Err(err);
        }
        self.running = Some(running);
        Ok(())
    }

    fn stop(&mut self) -> Result<(), AppError> {
        let Some(mut running) = self.running.take() else {
            return Ok(());
        };
        if let Err(err) = running.request("shutdown", Value::Null, SHUTDOWN_TIMEOUT) {
            debug!(error = %err, "shutdown request failed");
        }
        if let Err(err) = running.notify("exit", Value::Null) {
            debug!(error = %err, "exit notification failed");
        }
        running.terminate();
        Ok(())
    }

    fn is_running(&self) -> bool {
        self.running.is_some()
    }

    fn send_notification(&mut self, method: &str, params: Value) -> Result<(), AppError> {
        self.running()?.notify(method, params)
    }

    fn wait_notification(
        &mut self,
        method: &str,
        timeout: Duration,
    ) -> Result<Option<Value>, AppError> {
        self.running()?.wait_notification(method, timeout)
    }
}

impl Drop for ServerProcessClient {
    fn drop(&mut self) {
        if let Err(err) = self.stop() {
            debug!(error = %err, "failed to stop language server on drop");
        }
    }
}

impl Running {
    fn initialize(&mut self, launch: &ServerLaunch) -> Result<(), AppError> {
        let params = json!({
            "processId": std::process::id(),
            "rootUri": launch.root_uri,
            "clientInfo": { "name": env!("CARGO_PKG_NAME"), "version": env!("CARGO_PKG_VERSION") },
            "capabilities": {
                "workspace": {
                    "configuration": true,
                    "didChangeConfiguration": { "dynamicRegistration": false },
                },
                "window": { "workDoneProgress": !launch.is_feature_disabled(PROGRESS_FEATURE) },
            },
        });
        self.request("initialize", params, REQUEST_TIMEOUT)?;
        self.notify("initialized", json!({}))?;
        self.notify(
            "workspace/didChangeConfiguration",
            json!({ "settings": { CONFIGURATION_SECTION: launch.configuration } }),
        )
    }

    fn write(&self, message: Message) -> Result<(), AppError> {
        write_message(&self.writer, message)
    }

    fn notify(&self, method: &str, params: Value) -> Result<(), AppError> {
        self.write(Message::Notification(Notification::new(method.to_string(), params)))
    }

    fn request(
        &mut self,
        method: &str,
        params: Value,
        timeout: Duration,
    ) -> Result<Value, AppError> {
        self.next_id += 1;
        let id = RequestId::from(self.next_id);
        self.write(Message::Request(Request::new(id.clone(), method.to_string(), params)))?;

        let deadline = Instant::now() + timeout;
        loop {
            match self.recv_until(deadline)? {
                Some(Message::Response(response)) if response.id == id => {
                    if let Some(error) = response.error {
                        return Err(AppError::LanguageServer(format!(
                            "{method} failed: {}",
                            error.message
                        )));
                    }
                    return Ok(response.result.unwrap_or(Value::Null));
                }
                Some(Message::Notification(notification)) => self.pending.push_back(notification),
                Some(other) => trace!(?other, "ignoring message"),
                None => {
                    return Err(AppError::LanguageServer(format!("{method} timed out")));
                }
            }
        }
    }

    fn wait_notification(
        &mut self,
        method: &str,
        timeout: Duration,
    ) -> Result<Option<Value>, AppError> {
        if let Some(index) = self.pending.iter().position(|n| n.method == method) {
            return Ok(self.pending.remove(index).map(|n| n.params));
        }

        let deadline = Instant::now() + timeout;
        loop {
            match self.recv_until(deadline)? {
                Some(Message::Notification(notification)) if notification.method == method => {
                    return Ok(Some(notification.params));
                }
                Some(Message::Notification(notification)) => self.pending.push_back(notification),
                Some(other) => trace!(?other, "ignoring message"),
                None => return Ok(None),
            }
        }
    }

    /// Next message, or `None` once `deadline` passes.
    fn recv_until(&self, deadline: Instant) -> Result<Option<Message>, AppError> {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match self.incoming.recv_timeout(remaining) {
            Ok(message) => Ok(Some(message)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => {
                Err(AppError::LanguageServer("server exited".to_string()))
            }
        }
    }

    fn terminate(mut self) {
        let deadline = Instant::now() + SHUTDOWN_TIMEOUT;
        loop {
            match self.child.try_wait() {
                Ok(Some(status)) => {
                    debug!(%status, "language server exited");
                    break;
                }
                Ok(None) if Instant::now() < deadline => thread::sleep(Duration::from_millis(20)),
                Ok(None) | Err(_) => {
                    warn!("language server did not exit; killing it");
                    let _ = self.child.kill();
                    let _ = self.child.wait();
                    break;
                }
            }
        }
        if self.reader.join().is_err() {
            warn!("language server reader thread panicked");
        }
    }
}

fn write_message(writer: &SharedWriter, message: Message) -> Result<(), AppError> {
    let mut writer =
        writer.lock().map_err(|_| AppError::LanguageServer("writer lock poisoned".to_string()))?;
    message.write(&mut *writer)?;
    writer.flush()?;
    Ok(())
}

fn spawn_reader<R>(
    mut stdout: R,
    writer: SharedWriter,
    sender: Sender<Message>,
    configuration: ResolvedConfiguration,
) -> JoinHandle<()>
where
    R: std::io::BufRead + Send + 'static,
{
    thread::spawn(move || {
        loop {
            let message = match Message::read(&mut stdout) {
                Ok(Some(message)) => message,
                Ok(None) => break,
                Err(err) => {
                    debug!(error = %err, "language server stream closed");
                    break;
                }
            };

            match message {
                Message::Request(request) => {
                    let result = if request.method == "workspace/configuration" {
                        answer_configuration(&configuration, &request.params)
                    } else {
                        trace!(method = %request.method, "answering server request with null");
                        Value::Null
                    };
                    let response = Response::new_ok(request.id, result);
                    if let Err(err) = write_message(&writer, Message::Response(response)) {
                        debug!(error = %err, "failed to answer server request");
                        break;
                    }
                }
                other => {
                    if sender.send(other).is_err() {
                        break;
                    }
                }
            }
        }
    })
}

/// Result for a `workspace/configuration` request: one entry per requested item.
pub fn answer_configuration(configuration: &ResolvedConfiguration, params: &Value) -> Value {
    let section_value = serde_json::to_value(configuration).unwrap_or(Value::Null);
    let items = params.get("items").and_then(Value::as_array).cloned().unwrap_or_default();

    let answers = items
        .iter()
        .map(|item| match item.get("section").and_then(Value::as_str) {
            None => json!({ CONFIGURATION_SECTION: section_value }),
            Some(section) if section == CONFIGURATION_SECTION => section_value.clone(),
            Some(section) => section
                .strip_prefix(CONFIGURATION_SECTION)
                .and_then(|rest| rest.strip_prefix('.'))
                .and_then(|rest| section_value.pointer(&format!("/{}", rest.replace('.', "/"))))
                .cloned()
                .unwrap_or(Value::Null),
        })
        .collect();
    Value::Array(answers)
}
