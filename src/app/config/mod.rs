//! Host configuration loaders.
//!
//! Pure schema parsing lives in `domain::settings`; this module decides which
//! file to read and where the extension storage lives.

mod load_config;

pub use load_config::{SETTINGS_FILE, default_storage, load_settings};
