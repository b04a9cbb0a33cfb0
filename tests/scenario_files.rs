//! Integration tests: scenario files
//!
//! Loads scenario fixtures from disk, runs them, and checks the transcript.

mod fixtures;

use std::fs;
use std::process::Command;

use tempfile::TempDir;
use vhal_mock::types::{Operation, StatusCode};
use vhal_mock::{Scenario, ScenarioError, VehicleHardware};

#[test]
fn test_hvac_fixture_round_trip() {
    let scenario = Scenario::load(&fixtures::scenario_path("hvac")).unwrap();
    assert_eq!(scenario.configs[0].area_configs[0].area_id, 49);

    let transcript = scenario.run().unwrap();

    assert_eq!(transcript.steps.len(), 2);
    assert!(transcript.steps.iter().all(|s| s.status == StatusCode::Ok));

    let read = transcript.steps[0].get_results.as_ref().unwrap();
    assert_eq!(read[0].prop.as_ref().unwrap().value.float_values, vec![20.0]);

    assert_eq!(transcript.property_changes.len(), 1);
    assert_eq!(transcript.property_changes[0][0].value.float_values, vec![22.5]);
    assert_eq!(transcript.unconsumed_get_responses, 0);
    assert_eq!(transcript.unconsumed_set_responses, 0);
}

#[test]
fn test_denied_write_fixture() {
    let scenario = Scenario::load(&fixtures::scenario_path("denied_write")).unwrap();
    let transcript = scenario.run().unwrap();

    let write = &transcript.steps[0];
    assert_eq!(write.op, Operation::SetValues);
    assert_eq!(write.status, StatusCode::AccessDenied);
    assert!(write.set_results.is_none());

    let read = &transcript.steps[1];
    assert_eq!(read.status, StatusCode::Ok);
    assert_eq!(read.get_results.as_ref().unwrap()[0].status, StatusCode::NotAvailable);

    assert!(transcript.property_changes.is_empty());
    assert_eq!(transcript.unconsumed_set_responses, 1);
}

#[test]
fn test_build_from_temp_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("scenario.toml");
    fs::write(
        &path,
        r#"
[[configs]]
prop = 7
access = "READ"

[[configs]]
prop = 8
"#,
    )
    .unwrap();

    let hardware = Scenario::load(&path).unwrap().build().unwrap();
    let props: Vec<i32> = hardware
        .get_all_property_configs()
        .iter()
        .map(|c| c.prop)
        .collect();
    assert_eq!(props, vec![7, 8]);
}

#[test]
fn test_malformed_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.toml");
    fs::write(&path, "sleep_ms = \"soon\"\n").unwrap();

    assert!(matches!(Scenario::load(&path), Err(ScenarioError::Parse(_))));
}

#[test]
fn test_cli_validate_and_run() {
    let bin = env!("CARGO_BIN_EXE_vhal-mock");
    let path = fixtures::scenario_path("denied_write");

    let output = Command::new(bin).arg("validate").arg(&path).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("setValues = ACCESS_DENIED"), "{}", stdout);

    let output = Command::new(bin).arg("run").arg("--json").arg(&path).output().unwrap();
    assert!(output.status.success());
    let transcript: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(transcript["steps"][0]["status"], "ACCESS_DENIED");
    assert_eq!(transcript["steps"][1]["get_results"][0]["status"], "NOT_AVAILABLE");
}

#[test]
fn test_cli_missing_file_fails() {
    let bin = env!("CARGO_BIN_EXE_vhal-mock");
    let output = Command::new(bin)
        .arg("validate")
        .arg("/nonexistent/scenario.toml")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("not found"));
}
