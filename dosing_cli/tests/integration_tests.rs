//! Integration tests for the dosecalc binary.
//!
//! These tests verify end-to-end behavior including:
//! - Dose calculation and rendering in both languages
//! - Weight and drug rejection
//! - Config-supplied rules and rounding
//! - CSV chart export

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to create a test config directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the path to the CLI binary
///
/// Points XDG_CONFIG_HOME at an empty directory so a developer's own
/// config file cannot leak into the tests.
fn cli(config_home: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("dosecalc"));
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("Failed to write config");
    path
}

#[test]
fn test_cli_help() {
    let dir = setup_test_dir();
    cli(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Weight-based pediatric dose estimates",
        ));
}

#[test]
fn test_calc_ibuprofen_english() {
    let dir = setup_test_dir();
    cli(&dir)
        .args(["calc", "--weight", "20", "--drug", "ibuprofen"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nurofen (Ibuprofen) — every 6–8 hours"))
        .stdout(predicate::str::contains("Per-dose estimate: 200 mg"))
        .stdout(predicate::str::contains("Max in 24 hours: 800 mg"));
}

#[test]
fn test_calc_capped_paracetamol_czech() {
    let dir = setup_test_dir();
    cli(&dir)
        .args(["calc", "--weight", "150", "--drug", "paracetamol", "--lang", "cs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("každé 4–6 hodiny"))
        .stdout(predicate::str::contains("Dávka na jednu dávku: 1\u{a0}000 mg"))
        .stdout(predicate::str::contains("Maximum za 24 hodin: 3\u{a0}000 mg"));
}

#[test]
fn test_calc_drug_is_case_insensitive() {
    let dir = setup_test_dir();
    cli(&dir)
        .args(["calc", "--weight", "50", "--drug", "Ibuprofen"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Per-dose estimate: 400 mg"))
        .stdout(predicate::str::contains("Max in 24 hours: 1,200 mg"));
}

#[test]
fn test_calc_json_output() {
    let dir = setup_test_dir();
    let output = cli(&dir)
        .args(["calc", "--weight", "20", "--drug", "paracetamol", "--json"])
        .output()
        .expect("Failed to run dosecalc");

    assert!(output.status.success());
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is not JSON");
    assert_eq!(report["drug"], "paracetamol");
    assert_eq!(report["per_dose_mg"], 300);
    assert_eq!(report["max_daily_mg"], 1500);
    assert_eq!(report["rounding_step"], 10);
    assert_eq!(report["locale"], "en");
    assert!(report["calculated_at"].is_string());
}

#[test]
fn test_calc_rejects_low_weight() {
    let dir = setup_test_dir();
    cli(&dir)
        .args(["calc", "--weight", "1", "--drug", "ibuprofen"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid weight."))
        .stderr(predicate::str::contains("InvalidWeight").not())
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_calc_rejects_non_numeric_weight_in_czech() {
    let dir = setup_test_dir();
    cli(&dir)
        .args(["--lang", "cs", "calc", "--weight", "abc", "--drug", "ibuprofen"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Neplatná hmotnost."))
        .stderr(predicate::str::contains("Error:").not());
}

#[test]
fn test_calc_rejects_unknown_drug() {
    let dir = setup_test_dir();
    cli(&dir)
        .args(["calc", "--weight", "20", "--drug", "aspirin"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("aspirin"));
}

#[test]
fn test_unknown_language_fails() {
    let dir = setup_test_dir();
    cli(&dir)
        .args(["--lang", "de", "calc", "--weight", "20", "--drug", "ibuprofen"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("UnknownLocale"));
}

#[test]
fn test_step_override() {
    let dir = setup_test_dir();
    cli(&dir)
        .args(["calc", "--weight", "13.7", "--drug", "ibuprofen", "--step", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Per-dose estimate: 150 mg"))
        .stdout(predicate::str::contains("Max in 24 hours: 550 mg"));
}

#[test]
fn test_drugs_lists_builtin_rules() {
    let dir = setup_test_dir();
    cli(&dir)
        .arg("drugs")
        .assert()
        .success()
        .stdout(predicate::str::contains("ibuprofen"))
        .stdout(predicate::str::contains("paracetamol"))
        .stdout(predicate::str::contains("Paralen (Paracetamol) — every 4–6 hours"));
}

#[test]
fn test_config_adds_drug_and_language() {
    let dir = setup_test_dir();
    let config_path = write_config(
        &dir,
        r#"
[display]
language = "cs"

[drugs.naproxen]
per_dose_mg_per_kg = 5
single_dose_cap_mg = 250
max_daily_mg_per_kg = 10
max_daily_cap_mg = 1000
interval = { en = "every 12 hours", cs = "každých 12 hodin" }
label = { en = "Naproxen", cs = "Naproxen" }
"#,
    );

    cli(&dir)
        .arg("--config")
        .arg(&config_path)
        .args(["calc", "--weight", "30", "--drug", "naproxen"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Naproxen — každých 12 hodin"))
        .stdout(predicate::str::contains("Dávka na jednu dávku: 150 mg"))
        .stdout(predicate::str::contains("Maximum za 24 hodin: 300 mg"));
}

#[test]
fn test_config_rounding_step() {
    let dir = setup_test_dir();
    let config_path = write_config(
        &dir,
        r#"
[calculation]
rounding_step = 100
"#,
    );

    cli(&dir)
        .arg("--config")
        .arg(&config_path)
        .args(["calc", "--weight", "22", "--drug", "ibuprofen"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Per-dose estimate: 200 mg"))
        .stdout(predicate::str::contains("Max in 24 hours: 900 mg"));
}

#[test]
fn test_invalid_config_fails() {
    let dir = setup_test_dir();
    let config_path = write_config(
        &dir,
        r#"
[calculation]
rounding_step = 0
"#,
    );

    cli(&dir)
        .arg("--config")
        .arg(&config_path)
        .arg("drugs")
        .assert()
        .failure()
        .stderr(predicate::str::contains("rounding_step"));
}

#[test]
fn test_chart_to_stdout() {
    let dir = setup_test_dir();
    cli(&dir)
        .args(["chart", "--drug", "ibuprofen", "--from", "10", "--to", "50", "--by", "10"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("weight_kg,per_dose_mg,max_daily_mg"))
        .stdout(predicate::str::contains("20.0,200,800"))
        .stdout(predicate::str::contains("50.0,400,1200"));
}

#[test]
fn test_chart_to_file() {
    let dir = setup_test_dir();
    let csv_path = dir.path().join("chart.csv");

    cli(&dir)
        .args(["chart", "--drug", "paracetamol"])
        .arg("--output")
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 20 rows"));

    let csv = fs::read_to_string(&csv_path).expect("Failed to read chart");
    // Header plus 2..=40 kg in 2 kg increments
    assert_eq!(csv.lines().count(), 21);
    assert!(csv.contains("40.0,600,3000"));
}

#[test]
fn test_chart_rejects_tiny_increment() {
    let dir = setup_test_dir();
    cli(&dir)
        .args(["chart", "--drug", "ibuprofen", "--from", "2", "--to", "300", "--by", "1e-9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("rows"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_chart_rejects_out_of_range() {
    let dir = setup_test_dir();
    cli(&dir)
        .args(["chart", "--drug", "ibuprofen", "--to", "400"])
        .assert()
        .failure();
}
