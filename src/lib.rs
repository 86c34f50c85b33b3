//! ansible-bootstrap: resolve, provision, and configure the Ansible tool
//! chain for the Ansible language server.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{ActivationReport, HostOptions};
pub use app::bootstrap::{Activation, activate};
pub use app::{AppContext, Session, SessionState};
pub use domain::{AppError, ResolvedConfiguration, Settings};
