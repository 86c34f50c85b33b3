use std::path::PathBuf;
use std::time::Duration;

use clap::Subcommand;

use crate::app::api::{self, HostOptions};
use crate::domain::AppError;

#[derive(Subcommand)]
pub enum ServerCommands {
    /// Start the language server, complete the handshake, and stop it
    Check,
    /// Start the language server, restart it, and stop it
    Restart,
    /// Print the Ansible metadata the server collects for a playbook
    Metadata {
        /// Playbook or role file
        document: PathBuf,
        /// Seconds to wait for the server's reply
        #[arg(long, default_value_t = 10)]
        timeout: u64,
    },
    /// Ask the server to reload the inventory
    ResyncInventory {
        /// Playbook the inventory applies to
        document: PathBuf,
    },
}

pub fn run_server(options: &HostOptions, command: ServerCommands) -> Result<(), AppError> {
    match command {
        ServerCommands::Check => {
            api::check_server(options)?;
            println!("✅ Language server started and stopped cleanly");
        }
        ServerCommands::Restart => {
            api::restart_server(options)?;
            println!("✅ Language server restarted");
        }
        ServerCommands::Metadata { document, timeout } => {
            match api::show_metadata(options, &document, Duration::from_secs(timeout))? {
                Some(metadata) => println!("{}", serde_json::to_string_pretty(&metadata)?),
                None => println!("No metadata received for {}", document.display()),
            }
        }
        ServerCommands::ResyncInventory { document } => {
            if api::resync_inventory(options, &document)? {
                println!("✅ Requested inventory resync");
            } else {
                println!("{} is not an Ansible document", document.display());
            }
        }
    }
    Ok(())
}
