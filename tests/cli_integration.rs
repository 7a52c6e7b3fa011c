//! CLI integration tests for Stardock
//!
//! These tests exercise the full read-modify-write cycle on real files
//! in temporary directories, covering the ship, captain's log and
//! terminal command groups plus their failure modes.

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn stardock_cmd() -> assert_cmd::Command {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("stardock"))
}

/// Create a temporary directory with an initialized ship document
fn setup_ship() -> TempDir {
    let dir = TempDir::new().unwrap();
    stardock_cmd()
        .current_dir(dir.path())
        .args(["ship", "init", "--shipname", "uss-test", "--purpose", "demo"])
        .assert()
        .success();
    dir
}

// =============================================================================
// Ship Tests
// =============================================================================

#[test]
fn test_ship_init_creates_document() {
    let dir = setup_ship();

    let path = dir.path().join("Σship.md");
    assert!(path.is_file());

    let content = fs::read_to_string(path).unwrap();
    assert!(content.starts_with("---\n"));
    assert!(content.contains("shipname: uss-test"));
    assert!(content.contains("status: active"));
    assert!(content.contains("# uss-test"));
}

#[test]
fn test_ship_init_fails_without_force() {
    let dir = setup_ship();

    stardock_cmd()
        .current_dir(dir.path())
        .args(["ship", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    // --force overwrites
    stardock_cmd()
        .current_dir(dir.path())
        .args(["ship", "init", "--force", "--shipname", "other"])
        .assert()
        .success();
}

#[test]
fn test_add_tag_dedups_across_calls() {
    let dir = setup_ship();

    stardock_cmd()
        .current_dir(dir.path())
        .args(["ship", "add-tag", "alpha", "beta"])
        .assert()
        .success();
    stardock_cmd()
        .current_dir(dir.path())
        .args(["ship", "add-tag", "beta", "gamma"])
        .assert()
        .success();

    stardock_cmd()
        .current_dir(dir.path())
        .args(["ship", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("alpha, beta, gamma"));
}

#[test]
fn test_add_tag_without_ship_fails_and_creates_nothing() {
    let dir = TempDir::new().unwrap();

    stardock_cmd()
        .current_dir(dir.path())
        .args(["ship", "add-tag", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("stardock ship init"));

    assert!(!dir.path().join("Σship.md").exists());
}

#[test]
fn test_remove_tag_is_silent_for_absent_tags() {
    let dir = setup_ship();

    stardock_cmd()
        .current_dir(dir.path())
        .args(["ship", "add-tag", "keep", "drop"])
        .assert()
        .success();

    stardock_cmd()
        .current_dir(dir.path())
        .args(["ship", "remove-tag", "drop", "never-existed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Remaining tags: keep"));
}

#[test]
fn test_top_level_add_remove_aliases() {
    let dir = setup_ship();

    stardock_cmd()
        .current_dir(dir.path())
        .args(["add", "alpha"])
        .assert()
        .success();
    stardock_cmd()
        .current_dir(dir.path())
        .args(["remove", "alpha"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tags remaining"));
}

#[test]
fn test_fleet_add_merges_partial_updates() {
    let dir = setup_ship();

    stardock_cmd()
        .current_dir(dir.path())
        .args(["ship", "fleet-add", "fleetA", "--rank", "3", "--star", "⭐"])
        .assert()
        .success();
    stardock_cmd()
        .current_dir(dir.path())
        .args(["ship", "fleet-add", "fleetA", "--role", "leader"])
        .assert()
        .success();

    let output = stardock_cmd()
        .current_dir(dir.path())
        .args(["ship", "show", "--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let ship: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let fleets = ship["fleets"].as_array().unwrap();
    assert_eq!(fleets.len(), 1);
    assert_eq!(fleets[0]["name"], "fleetA");
    assert_eq!(fleets[0]["rank"], 3);
    assert_eq!(fleets[0]["star"], "⭐");
    assert_eq!(fleets[0]["role"], "leader");
}

#[test]
fn test_fleet_add_rejects_non_numeric_rank() {
    let dir = setup_ship();

    stardock_cmd()
        .current_dir(dir.path())
        .args(["ship", "fleet-add", "fleetA", "--rank", "high"])
        .assert()
        .failure();
}

#[test]
fn test_fleet_remove_filters_by_name() {
    let dir = setup_ship();

    stardock_cmd()
        .current_dir(dir.path())
        .args(["fleet", "one", "--rank", "1"])
        .assert()
        .success();
    stardock_cmd()
        .current_dir(dir.path())
        .args(["fleet", "two"])
        .assert()
        .success();
    stardock_cmd()
        .current_dir(dir.path())
        .args(["ship", "fleet-remove", "one"])
        .assert()
        .success();

    let output = stardock_cmd()
        .current_dir(dir.path())
        .args(["ship", "show", "--format", "json"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let ship: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let fleets = ship["fleets"].as_array().unwrap();
    assert_eq!(fleets.len(), 1);
    assert_eq!(fleets[0]["name"], "two");
}

// =============================================================================
// Captain's Log Tests
// =============================================================================

#[test]
fn test_log_init_uses_ship_name() {
    let dir = setup_ship();

    stardock_cmd()
        .current_dir(dir.path())
        .args(["captainslog", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("uss-test"));

    let content = fs::read_to_string(dir.path().join("Δcaptainslog.md")).unwrap();
    assert!(content.contains("ship: uss-test"));
    assert!(content.contains("# Captain's Log: uss-test"));
}

#[test]
fn test_log_init_falls_back_to_directory_name() {
    let dir = TempDir::new().unwrap();
    let project = dir.path().join("enterprise");
    fs::create_dir(&project).unwrap();

    stardock_cmd()
        .current_dir(&project)
        .args(["captainslog", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("enterprise"));
}

#[test]
fn test_log_entries_are_newest_first() {
    let dir = setup_ship();

    stardock_cmd()
        .current_dir(dir.path())
        .args(["captainslog", "init"])
        .assert()
        .success();
    stardock_cmd()
        .current_dir(dir.path())
        .args(["captainslog", "add", "first"])
        .assert()
        .success();
    stardock_cmd()
        .current_dir(dir.path())
        .args(["captainslog", "add", "second", "--impact", "high"])
        .assert()
        .success();

    let content = fs::read_to_string(dir.path().join("Δcaptainslog.md")).unwrap();

    // frontmatter entry order
    let first_entry = content.find("title: second").unwrap();
    let second_entry = content.find("title: first").unwrap();
    assert!(first_entry < second_entry);

    // body section order matches
    let body_second = content.find("- second").unwrap();
    let body_first = content.find("- first").unwrap();
    assert!(body_second < body_first);

    // one rendered section per entry
    assert_eq!(content.matches("## ").count(), 2);
    assert!(content.contains("**Impact:** HIGH | **Type:** note"));
}

#[test]
fn test_log_topics_union() {
    let dir = setup_ship();

    stardock_cmd()
        .current_dir(dir.path())
        .args(["captainslog", "init"])
        .assert()
        .success();
    stardock_cmd()
        .current_dir(dir.path())
        .args(["captainslog", "add", "one", "--topics", "nav, crew"])
        .assert()
        .success();
    stardock_cmd()
        .current_dir(dir.path())
        .args(["captainslog", "add", "two", "--topics", "crew,engines"])
        .assert()
        .success();

    let content = fs::read_to_string(dir.path().join("Δcaptainslog.md")).unwrap();
    let nav = content.find("- nav").unwrap();
    let crew = content.find("- crew").unwrap();
    let engines = content.find("- engines").unwrap();
    assert!(nav < crew && crew < engines);
    assert_eq!(content.matches("- crew").count(), 1);
}

#[test]
fn test_log_add_without_init_fails() {
    let dir = TempDir::new().unwrap();

    stardock_cmd()
        .current_dir(dir.path())
        .args(["captainslog", "add", "orphan"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("stardock captainslog init"));
}

// =============================================================================
// Terminal Tests
// =============================================================================

#[test]
fn test_terminal_flow() {
    let dir = TempDir::new().unwrap();

    stardock_cmd()
        .current_dir(dir.path())
        .args(["terminal", "init", "--session-name", "work"])
        .assert()
        .success();

    stardock_cmd()
        .current_dir(dir.path())
        .args([
            "terminal", "add", "editor", "--folder", "src", "--command", "vim",
            "--description", "main editor",
        ])
        .assert()
        .success();
    stardock_cmd()
        .current_dir(dir.path())
        .args(["terminal", "add", "shell", "--autostart", "false"])
        .assert()
        .success();

    stardock_cmd()
        .current_dir(dir.path())
        .args(["terminal", "list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("1. editor (src) - main editor")
                .and(predicate::str::contains("2. shell (.)")),
        );

    stardock_cmd()
        .current_dir(dir.path())
        .args(["terminal", "restore"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("&& vim")
                .and(predicate::str::contains("manual start")),
        );
}

#[test]
fn test_terminal_restore_with_no_rooms() {
    let dir = TempDir::new().unwrap();

    stardock_cmd()
        .current_dir(dir.path())
        .args(["terminal", "init"])
        .assert()
        .success();

    stardock_cmd()
        .current_dir(dir.path())
        .args(["terminal", "restore"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to restore"));
}

#[test]
fn test_terminal_list_without_init_fails() {
    let dir = TempDir::new().unwrap();

    stardock_cmd()
        .current_dir(dir.path())
        .args(["terminal", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("stardock terminal init"));
}

// =============================================================================
// Directory Flag Tests
// =============================================================================

#[test]
fn test_dir_flag_targets_another_directory() {
    let dir = TempDir::new().unwrap();

    stardock_cmd()
        .arg("-C")
        .arg(dir.path())
        .args(["ship", "init", "--shipname", "remote"])
        .assert()
        .success();

    assert!(dir.path().join("Σship.md").is_file());
}
