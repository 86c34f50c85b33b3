pub mod api;
pub mod bootstrap;
pub mod cli;
pub mod commands;
pub mod config;
mod context;
mod install_gate;
mod session;
pub mod tool_resolver;

pub use context::AppContext;
pub use install_gate::{InstallGate, InstallTicket};
pub use session::{Session, SessionState};
