use clap::Subcommand;

use crate::app::api::{self, HostOptions};
use crate::domain::{AppError, DocView};

#[derive(Subcommand)]
pub enum DocCommands {
    /// List plugins of a type
    #[clap(visible_alias = "ls")]
    List {
        /// Plugin type (module, lookup, callback, ...)
        plugin_type: String,
        /// Restrict to types that support snippets
        #[arg(long)]
        snippets: bool,
    },
    /// Show full documentation for a plugin
    Show { plugin_type: String, plugin: String },
    /// Show a usage snippet for a plugin
    Snippets { plugin_type: String, plugin: String },
}

pub fn run_doc(options: &HostOptions, command: DocCommands) -> Result<(), AppError> {
    match command {
        DocCommands::List { plugin_type, snippets } => {
            let view = if snippets { DocView::Snippet } else { DocView::Info };
            let entries = api::doc_list(options, view, &plugin_type)?;
            if entries.is_empty() {
                println!("No {plugin_type} plugins found");
            }
            for entry in entries {
                println!("{entry}");
            }
            Ok(())
        }
        DocCommands::Show { plugin_type, plugin } => {
            api::doc_show(options, DocView::Info, &plugin_type, &plugin)
        }
        DocCommands::Snippets { plugin_type, plugin } => {
            api::doc_show(options, DocView::Snippet, &plugin_type, &plugin)
        }
    }
}
