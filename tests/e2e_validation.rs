//! Validation and failure-path behavior of the CLI surface.

mod common;
use common::cli::{ApsWorkspace, run_aps, run_aps_ok};

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn commands_require_an_initialized_workspace() {
    let workspace = ApsWorkspace::new();
    let list = run_aps(&workspace, ["list"], "list");
    assert!(!list.status.success());
    assert!(list.stderr.contains("aps init"), "stderr: {}", list.stderr);
}

#[test]
fn submit_reports_each_blank_required_field() {
    let workspace = ApsWorkspace::new();
    run_aps_ok(&workspace, ["init"], "init");

    // Only the name is supplied; step 1 should name the other two.
    let submit = run_aps(
        &workspace,
        ["submit", "--json", "--name", "María"],
        "submit missing fields",
    );
    assert!(!submit.status.success());
    assert!(submit.stderr.contains("--phone"), "stderr: {}", submit.stderr);
    assert!(
        submit.stderr.contains("--municipality"),
        "stderr: {}",
        submit.stderr
    );
    assert!(!submit.stderr.contains("--name"));

    // Nothing was persisted.
    let list = run_aps_ok(&workspace, ["list", "--json"], "list");
    let rows: serde_json::Value = serde_json::from_str(&list.stdout).unwrap();
    assert_eq!(rows.as_array().map(Vec::len), Some(0));
}

#[test]
fn submit_validates_the_final_step_too() {
    let workspace = ApsWorkspace::new();
    run_aps_ok(&workspace, ["init"], "init");

    let submit = run_aps(
        &workspace,
        [
            "submit",
            "--json",
            "--name",
            "María",
            "--phone",
            "300",
            "--municipality",
            "Tumaco",
            "--help-type",
            "amenazas",
            "--urgency",
            "urgente",
            // description and contact left blank
        ],
        "submit missing step 3",
    );
    assert!(!submit.status.success());
    assert!(
        submit.stderr.contains("--description"),
        "stderr: {}",
        submit.stderr
    );
    assert!(
        submit.stderr.contains("--contact"),
        "stderr: {}",
        submit.stderr
    );
}

#[test]
fn status_rejects_values_outside_the_vocabulary() {
    let workspace = ApsWorkspace::new();
    run_aps_ok(&workspace, ["init"], "init");

    let status = run_aps(
        &workspace,
        ["status", "req-nope", "closed"],
        "status invalid value",
    );
    assert!(!status.status.success());
    assert!(
        status.stderr.contains("Invalid status"),
        "stderr: {}",
        status.stderr
    );
}

#[test]
fn status_unknown_reference_fails_cleanly() {
    let workspace = ApsWorkspace::new();
    run_aps_ok(&workspace, ["init"], "init");

    let status = run_aps(
        &workspace,
        ["status", "req-nope", "resolved"],
        "status unknown id",
    );
    assert!(!status.status.success());
    assert!(
        status.stderr.contains("Request not found"),
        "stderr: {}",
        status.stderr
    );
}

#[test]
fn track_unknown_ticket_is_a_notice_not_an_error() {
    let workspace = ApsWorkspace::new();
    run_aps_ok(&workspace, ["init"], "init");

    let track = run_aps_ok(&workspace, ["track", "--json", "APS-20260101-0000"], "track");
    let outcome: serde_json::Value = serde_json::from_str(&track.stdout).unwrap();
    assert_eq!(outcome["found"], false);
    assert!(outcome.get("request").is_none());
}

#[test]
fn clear_requires_confirmation() {
    let workspace = ApsWorkspace::new();
    run_aps_ok(&workspace, ["init"], "init");

    let refused = run_aps(&workspace, ["clear"], "clear unconfirmed");
    assert!(!refused.status.success());
    assert!(refused.stderr.contains("--yes"), "stderr: {}", refused.stderr);

    run_aps_ok(&workspace, ["clear", "--yes"], "clear confirmed");
}

#[test]
fn init_twice_needs_force() {
    let workspace = ApsWorkspace::new();
    run_aps_ok(&workspace, ["init"], "init");

    let again = run_aps(&workspace, ["init"], "init again");
    assert!(!again.status.success());
    assert!(
        again.stderr.contains("already initialized"),
        "stderr: {}",
        again.stderr
    );

    run_aps_ok(&workspace, ["init", "--force"], "init force");
}

#[test]
fn version_prints_the_crate_version() {
    let workspace = ApsWorkspace::new();
    Command::new(assert_cmd::cargo::cargo_bin("aps"))
        .arg("version")
        .current_dir(workspace.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("aps "));
}
