//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary with an isolated config directory and
//! verify outputs. None of them touch the network.

use std::io::Write;
use std::process::{Command, Stdio};

use tempfile::TempDir;

/// Run a CLI command and return (exit code, stdout, stderr).
fn run_cli(home: &TempDir, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_dayglow"))
        .args(args)
        .env("DAYGLOW_HOME", home.path())
        .env_remove("DAYGLOW_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

#[test]
fn test_lighting_at_noon_json() {
    let home = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(&home, &["lighting", "--at", "12:00", "--json"]);
    assert_eq!(code, 0, "lighting failed");

    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["phase"], "day");
    assert_eq!(parsed["intensity"].as_f64(), Some(1.0));
    assert_eq!(parsed["sun_x"].as_f64(), Some(50.0));
}

#[test]
fn test_lighting_rejects_bad_time() {
    let home = TempDir::new().unwrap();
    let (code, _, _) = run_cli(&home, &["lighting", "--at", "25:99"]);
    assert_ne!(code, 0);
}

#[test]
fn test_lighting_chart() {
    let home = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(&home, &["lighting", "--chart"]);
    assert_eq!(code, 0, "lighting chart failed");
    assert!(stdout.contains("12:00"));
}

#[test]
fn test_weather_list() {
    let home = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(&home, &["weather", "--list"]);
    assert_eq!(code, 0, "weather list failed");
    assert!(stdout.contains("bangkok"));
    assert!(stdout.contains("salaya"));
    assert!(stdout.contains("phetchaburi"));
}

#[test]
fn test_weather_unknown_location() {
    let home = TempDir::new().unwrap();
    let (code, _, stderr) = run_cli(&home, &["weather", "atlantis"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown location"), "stderr: {stderr}");
}

#[test]
fn test_config_defaults() {
    let home = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(&home, &["config", "get", "timer.work_minutes"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "25");
}

#[test]
fn test_config_set_then_get() {
    let home = TempDir::new().unwrap();
    let (code, _, _) = run_cli(&home, &["config", "set", "timer.break_minutes", "10"]);
    assert_eq!(code, 0, "config set failed");

    let (code, stdout, _) = run_cli(&home, &["config", "get", "timer.break_minutes"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "10");
}

#[test]
fn test_config_set_unknown_key() {
    let home = TempDir::new().unwrap();
    let (code, _, stderr) = run_cli(&home, &["config", "set", "timer.nope", "1"]);
    assert_eq!(code, 1);
    assert!(stderr.starts_with("error:"));
}

#[test]
fn test_timer_exits_on_closed_stdin() {
    let home = TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_dayglow"))
        .args(["timer", "--mode", "break", "--json"])
        .env("DAYGLOW_HOME", home.path())
        .stdin(Stdio::null())
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let first: serde_json::Value = serde_json::from_str(stdout.lines().next().unwrap()).unwrap();
    assert_eq!(first["type"], "ModeChanged");
    assert_eq!(first["mode"], "break");
    assert_eq!(first["remaining_ms"], 300_000);
}

#[test]
fn test_dashboard_renders_and_quits() {
    let home = TempDir::new().unwrap();
    // Point weather at a closed port so the background fetch fails fast.
    let (code, _, _) = run_cli(
        &home,
        &["config", "set", "weather.api_base_url", "http://127.0.0.1:1"],
    );
    assert_eq!(code, 0);

    let mut child = Command::new(env!("CARGO_BIN_EXE_dayglow"))
        .args(["dashboard", "--location", "salaya"])
        .env("DAYGLOW_HOME", home.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(b"q\n").unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[WORK]  break  25:00.00  (start)"), "stdout: {stdout}");
}

#[test]
fn test_dashboard_rejects_unknown_location() {
    let home = TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_dayglow"))
        .args(["dashboard", "--location", "atlantis"])
        .env("DAYGLOW_HOME", home.path())
        .stdin(Stdio::null())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown location"));
}
