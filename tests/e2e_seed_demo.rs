//! Demo dataset seeding and the views it feeds.

mod common;
use common::cli::{ApsWorkspace, run_aps_ok};

#[test]
fn seed_loads_ten_requests_once() {
    let workspace = ApsWorkspace::new();
    run_aps_ok(&workspace, ["init"], "init");

    let seed = run_aps_ok(&workspace, ["seed", "--json"], "seed");
    let loaded: serde_json::Value = serde_json::from_str(&seed.stdout).unwrap();
    assert_eq!(loaded["loaded"], 10);

    // Idempotent: the known tickets are already present.
    let again = run_aps_ok(&workspace, ["seed", "--json"], "seed again");
    let loaded: serde_json::Value = serde_json::from_str(&again.stdout).unwrap();
    assert_eq!(loaded["loaded"], 0);

    let stats = run_aps_ok(&workspace, ["stats", "--json"], "stats");
    let counts: serde_json::Value = serde_json::from_str(&stats.stdout).unwrap();
    assert_eq!(counts["total"], 10);
    assert_eq!(counts["pending"], 4);
    assert_eq!(counts["in_progress"], 4);
    assert_eq!(counts["resolved"], 2);
}

#[test]
fn legacy_demo_tickets_resolve_through_the_index() {
    let workspace = ApsWorkspace::new();
    run_aps_ok(&workspace, ["init"], "init");
    run_aps_ok(&workspace, ["seed", "--json"], "seed");

    let track = run_aps_ok(&workspace, ["track", "--json", "alz-2024-001"], "track");
    let outcome: serde_json::Value = serde_json::from_str(&track.stdout).unwrap();
    assert_eq!(outcome["found"], true);
    assert_eq!(outcome["request"]["name"], "María González");
    assert_eq!(outcome["request"]["municipality"], "Tumaco");
    // Legacy vocabulary survives untouched.
    assert_eq!(outcome["request"]["urgency"], "high");
}

#[test]
fn list_filters_cut_across_the_demo_set() {
    let workspace = ApsWorkspace::new();
    run_aps_ok(&workspace, ["init"], "init");
    run_aps_ok(&workspace, ["seed", "--json"], "seed");

    let pending = run_aps_ok(
        &workspace,
        ["list", "--json", "--status", "pending"],
        "list pending",
    );
    let rows: serde_json::Value = serde_json::from_str(&pending.stdout).unwrap();
    assert_eq!(rows.as_array().map(Vec::len), Some(4));

    let tumaco = run_aps_ok(
        &workspace,
        ["list", "--json", "--municipality", "tumaco"],
        "list tumaco",
    );
    let rows: serde_json::Value = serde_json::from_str(&tumaco.stdout).unwrap();
    assert_eq!(rows.as_array().map(Vec::len), Some(5));

    let shelter = run_aps_ok(
        &workspace,
        ["list", "--json", "--help-type", "refugio-temporal"],
        "list shelter",
    );
    let rows: serde_json::Value = serde_json::from_str(&shelter.stdout).unwrap();
    assert_eq!(rows.as_array().map(Vec::len), Some(1));
    assert_eq!(rows[0]["ticket"], "ALZ-2024-004");

    // Default sort is newest first; the top row is the freshest demo record.
    let all = run_aps_ok(&workspace, ["list", "--json"], "list all");
    let rows: serde_json::Value = serde_json::from_str(&all.stdout).unwrap();
    assert_eq!(rows[0]["ticket"], "ALZ-2024-008");
}

#[test]
fn clear_wipes_the_demo_set() {
    let workspace = ApsWorkspace::new();
    run_aps_ok(&workspace, ["init"], "init");
    run_aps_ok(&workspace, ["seed", "--json"], "seed");
    run_aps_ok(&workspace, ["clear", "--yes"], "clear");

    let list = run_aps_ok(&workspace, ["list", "--json"], "list");
    let rows: serde_json::Value = serde_json::from_str(&list.stdout).unwrap();
    assert_eq!(rows.as_array().map(Vec::len), Some(0));

    let track = run_aps_ok(&workspace, ["track", "--json", "ALZ-2024-001"], "track");
    let outcome: serde_json::Value = serde_json::from_str(&track.stdout).unwrap();
    assert_eq!(outcome["found"], false);
}
