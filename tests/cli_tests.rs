//! shift-probe 命令行测试

use assert_cmd::Command;
use predicates::str::contains;
use serde_json::Value;
use shift_probe::fixture::debug_request;
use std::fs;
use std::net::TcpListener;
use tempfile::TempDir;

fn cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("shift-probe").unwrap();
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

#[test]
fn test_help() {
    let home = TempDir::new().unwrap();
    cmd(&home).arg("--help").assert().success().stdout(contains("run"));
    cmd(&home).args(["run", "--help"]).assert().success().stdout(contains("--strict"));
    cmd(&home).args(["payload", "--help"]).assert().success();
    cmd(&home).args(["validate", "--help"]).assert().success();
}

#[test]
fn test_payload_prints_debug_request() {
    let home = TempDir::new().unwrap();
    let out = cmd(&home)
        .arg("payload")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let payload: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(payload, serde_json::to_value(debug_request()).unwrap());
    assert_eq!(payload["employees"][0]["id"], "emp1");
    assert_eq!(payload["schedulingPeriod"]["startDate"], "2024-01-15T00:00:00Z");
}

#[test]
fn test_run_not_found_exits_normally() {
    let home = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/schedule")
        .with_status(404)
        .with_body("not found")
        .create();

    let endpoint = format!("{}/schedule", server.url());
    cmd(&home)
        .args(["run", "--endpoint", endpoint.as_str()])
        .assert()
        .success()
        .stdout(contains("❌ API request failed with status 404"))
        .stdout(contains("Response: not found"));
}

#[test]
fn test_run_success_report() {
    let home = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/schedule")
        .with_status(200)
        .with_body(
            r#"{"shifts": [{"id": "s1", "date": "2024-01-15T00:00:00", "startTime": "09:00",
                "endTime": "17:00", "assignedEmployees": [], "status": "pending"}],
                "analytics": {"employeeUtilization": [
                    {"employeeId": "emp1", "totalHours": 0, "shiftsAssigned": 0}]},
                "violations": [{"type": "hard", "description": "No Manager available"}]}"#,
        )
        .create();

    let endpoint = format!("{}/schedule", server.url());
    cmd(&home)
        .args(["run", "--endpoint", endpoint.as_str(), "--strict"])
        .assert()
        .success()
        .stdout(contains("=== DEBUGGING ASSIGNMENT ISSUE ==="))
        .stdout(contains("Total shifts generated: 1"))
        .stdout(contains("  emp1: 0 shifts, 0 hours"))
        .stdout(contains("  - hard: No Manager available"))
        .stdout(contains("No employees were assigned to any shift"));
}

#[test]
fn test_config_file_endpoint_and_strict() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("probe.yaml");
    fs::write(
        &config,
        format!("endpoint: http://127.0.0.1:{}/schedule\n", closed_port()),
    )
    .unwrap();

    cmd(&home)
        .args(["--config", config.to_str().unwrap()])
        .assert()
        .success()
        .stdout(contains("❌ Error:"));

    cmd(&home)
        .args(["--config", config.to_str().unwrap(), "run", "--strict"])
        .assert()
        .failure()
        .stdout(contains("❌ Error:"));
}

#[test]
fn test_default_config_in_home() {
    let home = TempDir::new().unwrap();
    fs::create_dir_all(home.path().join(".shift-probe")).unwrap();
    fs::write(
        home.path().join(".shift-probe").join("config.yaml"),
        format!(
            "endpoint: http://127.0.0.1:{}/schedule\nstrict: true\n",
            closed_port()
        ),
    )
    .unwrap();

    cmd(&home).assert().failure().stdout(contains("❌ Error:"));
}

#[test]
fn test_missing_config_file() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["--config", "/nonexistent/probe.yaml", "run"])
        .assert()
        .failure()
        .stderr(contains("Config file not found"));
}

#[test]
fn test_validate_request_documents() {
    let home = TempDir::new().unwrap();

    let valid = home.path().join("request.yaml");
    fs::write(&valid, serde_yaml::to_string(debug_request()).unwrap()).unwrap();
    cmd(&home)
        .args(["validate", valid.to_str().unwrap()])
        .assert()
        .success()
        .stdout(contains("1 employees, 1 shift types, 2024-01-15 to 2024-01-16"));

    let mut empty = debug_request().clone();
    empty.employees.clear();
    let invalid = home.path().join("empty.json");
    fs::write(&invalid, serde_json::to_string(&empty).unwrap()).unwrap();
    cmd(&home)
        .args(["validate", invalid.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(contains("Invalid request document"));
}

#[test]
fn test_run_with_request_file() {
    let home = TempDir::new().unwrap();
    let mut request = debug_request().clone();
    request.employees[0].id = "emp42".to_string();
    let path = home.path().join("request.json");
    fs::write(&path, serde_json::to_string(&request).unwrap()).unwrap();

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/schedule")
        .match_body(mockito::Matcher::Regex(r#""id":"emp42""#.to_string()))
        .with_status(200)
        .with_body(r#"{"shifts": [], "analytics": {}}"#)
        .create();

    let endpoint = format!("{}/schedule", server.url());
    cmd(&home)
        .args([
            "run",
            "--endpoint",
            endpoint.as_str(),
            "--request",
            path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(contains("Total shifts generated: 0"));
    mock.assert();
}

#[test]
fn test_csv_export_failure_is_printed() {
    let home = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/schedule")
        .with_status(200)
        .with_body(r#"{"shifts": [], "analytics": {}}"#)
        .create();

    let endpoint = format!("{}/schedule", server.url());
    let csv = home.path().join("missing").join("schedule.csv");
    let args = ["run", "--endpoint", endpoint.as_str(), "--csv", csv.to_str().unwrap()];

    cmd(&home)
        .args(args)
        .assert()
        .success()
        .stdout(contains("❌ Error: failed to export CSV"));

    cmd(&home).args(args).arg("--strict").assert().failure();
}
