//! `ansible-doc` plugin listings and invocations.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::domain::AppError;

/// Plugin types `ansible-doc` can describe.
pub const INFO_PLUGIN_TYPES: [&str; 15] = [
    "module",
    "become",
    "cache",
    "callback",
    "cliconf",
    "connection",
    "httpapi",
    "inventory",
    "lookup",
    "netconf",
    "shell",
    "vars",
    "strategy",
    "role",
    "keyword",
];

/// `ansible-doc -s` only renders snippets for these types.
pub const SNIPPET_PLUGIN_TYPES: [&str; 3] = ["module", "inventory", "lookup"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocView {
    Info,
    Snippet,
}

impl DocView {
    pub fn plugin_types(self) -> &'static [&'static str] {
        match self {
            DocView::Info => &INFO_PLUGIN_TYPES,
            DocView::Snippet => &SNIPPET_PLUGIN_TYPES,
        }
    }

    pub fn terminal_name(self) -> &'static str {
        match self {
            DocView::Info => "ansibleDocShowInfo",
            DocView::Snippet => "ansibleDocShowSnippets",
        }
    }

    pub fn validate_plugin_type(self, plugin_type: &str) -> Result<(), AppError> {
        if self.plugin_types().contains(&plugin_type) {
            return Ok(());
        }
        Err(AppError::UnsupportedPluginType {
            plugin_type: plugin_type.to_string(),
            view: self.to_string(),
            available: self.plugin_types().join(", "),
        })
    }

    /// Arguments for `ansible-doc` that render one plugin.
    pub fn show_args(self, plugin_type: &str, plugin: &str) -> Vec<String> {
        let mut args = vec!["-t".to_string(), plugin_type.to_string()];
        if self == DocView::Snippet {
            args.push("-s".to_string());
        }
        args.push(plugin.to_string());
        args
    }
}

impl fmt::Display for DocView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocView::Info => f.write_str("plugin documentation"),
            DocView::Snippet => f.write_str("plugin snippets"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginEntry {
    pub name: String,
    pub description: String,
}

impl fmt::Display for PluginEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: [{}]", self.name, self.description)
    }
}

/// Arguments for `ansible-doc` that list every plugin of a type as JSON.
pub fn list_args(plugin_type: &str) -> Vec<String> {
    vec!["-l".to_string(), "-j".to_string(), "-t".to_string(), plugin_type.to_string()]
}

/// Parse `ansible-doc -l -j` output. Anything unparsable yields no entries.
pub fn parse_plugin_list(stdout: &str) -> Vec<PluginEntry> {
    let Ok(listing) = serde_json::from_str::<BTreeMap<String, Value>>(stdout) else {
        return Vec::new();
    };

    listing
        .into_iter()
        .map(|(name, description)| {
            let description = match description {
                Value::String(text) => text,
                other => other.to_string(),
            };
            PluginEntry { name, description }
        })
        .collect()
}
