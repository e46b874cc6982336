use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn moneyfix(base: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("moneyfix").unwrap();
    cmd.env("MONEYFIX_DIR", base.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn summary_prints_seed_budget() {
    let base = TempDir::new().unwrap();
    moneyfix(&base)
        .args(["--month", "1", "--year", "2026", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Januar 2026"))
        .stdout(predicate::str::contains("Gehalt"))
        .stdout(predicate::str::contains("Was mir bleibt:  1.840\u{a0}€"));
}

#[test]
fn summary_reads_settings_file() {
    let base = TempDir::new().unwrap();
    std::fs::write(
        base.path().join("settings.json"),
        r#"{ "month": "Mai", "year": 2025, "initial_expenses": [] }"#,
    )
    .unwrap();

    moneyfix(&base)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mai 2025"))
        .stdout(predicate::str::contains("Noch keine Einträge vorhanden"))
        .stdout(predicate::str::contains("4.550\u{a0}€"));
}

#[test]
fn export_writes_pdf() {
    let base = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    moneyfix(&base)
        .args(["export", "--output-dir"])
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("money-fix-planer-uebersicht.pdf"));

    let pdf = std::fs::read(out.path().join("money-fix-planer-uebersicht.pdf")).unwrap();
    assert!(pdf.starts_with(b"%PDF"));
}

#[test]
fn export_to_missing_directory_fails() {
    let base = TempDir::new().unwrap();
    moneyfix(&base)
        .args(["export", "--output-dir"])
        .arg(base.path().join("nope"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn invalid_settings_fail() {
    let base = TempDir::new().unwrap();
    std::fs::write(base.path().join("settings.json"), "{ broken").unwrap();
    moneyfix(&base)
        .arg("summary")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn config_shows_paths() {
    let base = TempDir::new().unwrap();
    moneyfix(&base)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("settings.json"));
}

#[test]
fn month_out_of_range_is_rejected() {
    let base = TempDir::new().unwrap();
    moneyfix(&base)
        .args(["--month", "13", "summary"])
        .assert()
        .failure();
}
