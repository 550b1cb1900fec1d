use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

#[test]
fn sample_then_forecast_runs_end_to_end() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("snapshot.json");

    let mut sample = Command::cargo_bin("cashflow_core_cli").unwrap();
    let output = sample.arg("sample").assert().success();
    std::fs::write(&path, &output.get_output().stdout).unwrap();

    let mut forecast = Command::cargo_bin("cashflow_core_cli").unwrap();
    let output = forecast
        .args(["forecast", path.to_str().unwrap(), "2024-01-15"])
        .assert()
        .success()
        .stdout(contains("\"balance\""));

    let result: serde_json::Value =
        serde_json::from_slice(&output.get_output().stdout).unwrap();
    let points = result["points"].as_array().unwrap();
    // Default horizon: the anchor month plus six more.
    assert_eq!(points.len(), 7);
    assert_eq!(points[0]["date"], "2024-01-01");
}

#[test]
fn forecast_honors_an_explicit_horizon() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("snapshot.json");

    let mut sample = Command::cargo_bin("cashflow_core_cli").unwrap();
    let output = sample.arg("sample").assert().success();
    std::fs::write(&path, &output.get_output().stdout).unwrap();

    let mut forecast = Command::cargo_bin("cashflow_core_cli").unwrap();
    let output = forecast
        .args(["forecast", path.to_str().unwrap(), "2024-11-01", "2"])
        .assert()
        .success();

    let result: serde_json::Value =
        serde_json::from_slice(&output.get_output().stdout).unwrap();
    let points = result["points"].as_array().unwrap();
    assert_eq!(points.len(), 3);
    assert_eq!(points[2]["date"], "2025-01-01");
}

#[test]
fn unknown_command_prints_usage_and_fails() {
    let mut cmd = Command::cargo_bin("cashflow_core_cli").unwrap();
    cmd.arg("bogus").assert().failure().stderr(contains("Usage"));
}

#[test]
fn forecast_with_a_missing_snapshot_fails() {
    let mut cmd = Command::cargo_bin("cashflow_core_cli").unwrap();
    cmd.args(["forecast", "/nonexistent/snapshot.json", "2024-01-01"])
        .assert()
        .failure()
        .stderr(contains("Error"));
}
