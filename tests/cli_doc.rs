#![cfg(unix)]

mod common;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn lists_plugins_from_ansible_doc() {
    let ctx = TestContext::new();
    ctx.add_python();
    ctx.add_system_tools();

    ctx.cli()
        .args(["doc", "list", "module"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ansible.builtin.copy: [Copy files to remote locations]"));
}

#[test]
fn snippets_reject_unsupported_plugin_type() {
    let ctx = TestContext::new();
    ctx.add_python();
    ctx.add_system_tools();

    ctx.cli()
        .args(["doc", "list", "callback", "--snippets"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported plugin type 'callback'"));
}

#[test]
fn run_playbook_is_not_implemented() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("run-playbook")
        .assert()
        .success()
        .stderr(predicate::str::contains("Not implemented"));
}
