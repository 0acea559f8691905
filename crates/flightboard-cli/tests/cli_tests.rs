use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing.
/// The XDG config home points into `env` so no user config is picked up.
fn fboard_cmd(env: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fboard").expect("Failed to find fboard binary");
    cmd.env("XDG_CONFIG_HOME", env.path()).arg("--no-color");
    cmd
}

/// Writes a configuration with short timings so a one second run sees
/// several flights.
fn write_fast_config(env: &TempDir, extra: &str) -> String {
    let path = env.path().join("fast.json");
    let contents = format!(
        r#"{{
            "timings": {{
                "on_time_after_ms": 300,
                "outcome_after_ms": 300,
                "delayed_for_ms": 300,
                "retention_ms": 300,
                "tick_ms": 100,
                "generator_ms": 100
            }}{extra}
        }}"#
    );
    fs::write(&path, contents).expect("Failed to write config");
    path.to_str().unwrap().to_string()
}

#[test]
fn test_cli_templates_lists_default_pool() {
    let env = create_cli_test_environment();

    fboard_cmd(&env)
        .arg("templates")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Flight templates"))
        .stdout(predicate::str::contains("FR5902"))
        .stdout(predicate::str::contains("REGGIO CALABRIA"));
}

#[test]
fn test_cli_templates_from_config_file() {
    let env = create_cli_test_environment();
    let config = env.path().join("pool.json");
    fs::write(
        &config,
        r#"{"templates":[{"date":"01-05","time":"08:00","destination":"LISBON","flight_number":"TP1"}]}"#,
    )
    .unwrap();

    fboard_cmd(&env)
        .args(["--config-file", config.to_str().unwrap(), "templates"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TP1"))
        .stdout(predicate::str::contains("LISBON"))
        .stdout(predicate::str::contains("FR5902").not());
}

#[test]
fn test_cli_config_prints_defaults() {
    let env = create_cli_test_environment();

    fboard_cmd(&env)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"delay_probability\": 0.3"))
        .stdout(predicate::str::contains("\"discipline\": \"independent\""));
}

#[test]
fn test_cli_config_reads_xdg_file() {
    let env = create_cli_test_environment();
    let dir = env.path().join("flightboard");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.json"), r#"{"discipline":"lockstep"}"#).unwrap();

    fboard_cmd(&env)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"discipline\": \"lockstep\""));
}

#[test]
fn test_cli_rejects_invalid_config() {
    let env = create_cli_test_environment();
    let config = env.path().join("bad.json");
    fs::write(&config, r#"{"delay_probability": 2.0}"#).unwrap();

    fboard_cmd(&env)
        .args(["--config-file", config.to_str().unwrap(), "config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_cli_missing_config_file_fails() {
    let env = create_cli_test_environment();
    let config = env.path().join("missing.json");

    fboard_cmd(&env)
        .args(["--config-file", config.to_str().unwrap(), "config"])
        .assert()
        .failure();
}

#[test]
fn test_cli_run_renders_board() {
    let env = create_cli_test_environment();
    let config = write_fast_config(&env, "");

    fboard_cmd(&env)
        .args(["--config-file", &config, "run", "--duration", "1", "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Departures at"))
        .stdout(predicate::str::contains("| Date | Time | Destination |"))
        .stdout(predicate::str::contains("DEPARTING"))
        .stdout(predicate::str::contains("Simulation stopped:"))
        .stdout(predicate::str::contains("flights added"));
}

#[test]
fn test_cli_run_lockstep_random() {
    let env = create_cli_test_environment();
    let config = write_fast_config(&env, "");

    fboard_cmd(&env)
        .args([
            "--config-file",
            &config,
            "run",
            "--discipline",
            "lockstep",
            "--source",
            "random",
            "--duration",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("| FL"))
        .stdout(predicate::str::contains("ON_TIME"));
}

#[test]
fn test_cli_run_json_lines() {
    let env = create_cli_test_environment();
    let config = write_fast_config(&env, r#", "seed": 3"#);

    let output = fboard_cmd(&env)
        .args(["--config-file", &config, "run", "--duration", "1", "--json"])
        .output()
        .expect("Failed to run fboard");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines.len() > 1);
    assert_eq!(lines[0], "[]");
    for line in lines {
        let board: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(board.is_array());
    }
    assert!(!stdout.contains("Simulation stopped"));
}

#[test]
fn test_cli_rejects_unknown_discipline() {
    let env = create_cli_test_environment();

    fboard_cmd(&env)
        .args(["run", "--discipline", "sometimes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
