use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_timetable_prints_builtin_table() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("classboard")
        .env("CLASSBOARD_HOME", dir.path())
        .arg("timetable")
        .assert()
        .success()
        .stdout(predicate::str::contains("Section H - Timetable"))
        .stdout(predicate::str::contains("Monday"))
        .stdout(predicate::str::contains("Friday"))
        .stdout(predicate::str::contains("ENGG PHY LAB"));
}

#[test]
fn test_timetable_uses_config_override() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(
        &config_path,
        r#"
title = "Section K"

[timetable]
monday = ["Biology", "Chemistry", "", "", "", "", "Art"]
"#,
    )
    .unwrap();

    cargo_bin_cmd!("classboard")
        .arg("--config")
        .arg(&config_path)
        .arg("timetable")
        .assert()
        .success()
        .stdout(predicate::str::contains("Section K"))
        .stdout(predicate::str::contains("Chemistry"));
}

#[test]
fn test_timetable_rejects_wrong_period_count() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "[timetable]\ntuesday = [\"Math\"]\n").unwrap();

    cargo_bin_cmd!("classboard")
        .arg("--config")
        .arg(&config_path)
        .arg("timetable")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid timetable"))
        .stderr(predicate::str::contains("expected 7"));
}

#[test]
fn test_dashboard_requires_terminal() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("classboard")
        .env("CLASSBOARD_HOME", dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("classboard timetable"));

    assert!(!dir.path().join("classboard.log").exists());
}
