//! Host commands. Each module exposes `execute` (or a small family of entry
//! points) taking the application context and the session it acts on.

pub mod ansible_doc;
pub mod install_requirements_tools;
pub mod run_playbook;
pub mod server_restart;
pub mod server_resync_inventory;
pub mod server_show_metadata;

/// Command identifiers as registered by editor hosts.
pub const SERVER_RESTART: &str = "ansible.server.restart";
pub const SERVER_SHOW_METADATA: &str = "ansible.server.showMetaData";
pub const SERVER_RESYNC_INVENTORY: &str = "ansible.server.resyncAnsibleInventory";
pub const INSTALL_REQUIREMENTS_TOOLS: &str = "ansible.builtin.installRequirementsTools";
pub const ANSIBLE_DOC_SHOW_INFO: &str = "ansible.ansbileDoc.showInfo";
pub const ANSIBLE_DOC_SHOW_SNIPPETS: &str = "ansible.ansbileDoc.showSnippets";
pub const RUN_PLAYBOOK: &str = "ansible.ansible-playbook.run";
pub const RUN_NAVIGATOR: &str = "ansible.ansible-navigator.run";
