use assert_cmd::cargo::cargo_bin_cmd;
use dealerdash::stats::DashboardStats;
use dealerdash::{NotificationKind, NotificationManager, NotificationSpec};
use predicates::prelude::*;
use std::path::PathBuf;
use std::time::Duration;

/// Helper to get path to fixture file
fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_cli_with_invalid_stats_file() {
    let fixture = fixture_path("invalid.json");

    cargo_bin_cmd!()
        .arg(&fixture)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid stats input"));
}

#[test]
fn test_cli_with_nonexistent_file() {
    cargo_bin_cmd!()
        .arg("nonexistent.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_cli_help_flag() {
    cargo_bin_cmd!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Car-dealership catalog dashboard"));
}

#[test]
fn test_cli_version_flag() {
    cargo_bin_cmd!()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dealerdash"));
}

#[test]
fn test_fixture_stats_parse() {
    let stats = DashboardStats::from_file(&fixture_path("stats.json")).unwrap();
    assert_eq!(stats.total_cars, 1284);
    assert_eq!(stats.draft_cars, 84);
    assert_eq!(stats.monthly_revenue, 3_200_000.0);
}

#[test]
fn test_independent_managers_keep_independent_clocks() {
    let mut first = NotificationManager::new();
    let mut second = NotificationManager::new();

    first.enqueue(NotificationSpec::success("Saved").with_duration_ms(3000));
    second.enqueue(NotificationSpec::success("Saved").with_duration_ms(3000));

    first.advance(Duration::from_millis(3000));

    assert!(first.is_empty());
    assert_eq!(second.len(), 1);
    assert_eq!(
        second.list().next().map(|n| n.kind()),
        Some(NotificationKind::Success)
    );
}

#[test]
fn test_race_dismiss_before_expiry_via_public_api() {
    let mut manager = NotificationManager::new();
    let id = manager.enqueue(NotificationSpec::info("Race").with_duration_ms(100));

    manager.advance(Duration::from_millis(50));
    manager.dismiss(id);
    let revision = manager.revision();

    assert!(manager.advance(Duration::from_millis(100)).is_empty());
    assert_eq!(manager.revision(), revision);
    assert!(!manager.dismiss(id));
}
