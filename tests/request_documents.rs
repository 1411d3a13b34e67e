//! Integration tests for request documents and the command-line binary.
//!
//! Requests are written to temporary files, then either deserialized and run
//! through the handlers or passed to the `ahp-engine` binary.

use std::io::Write;
use std::process::Command;

use tempfile::NamedTempFile;

use ahp_engine::application::{
    AssessJudgmentsCommand, AssessJudgmentsHandler, EvaluateDecisionCommand,
    EvaluateDecisionHandler,
};
use ahp_engine::config::EngineConfig;
use ahp_engine::domain::ahp::{AhpEngine, RankBand};

// =============================================================================
// Test Infrastructure
// =============================================================================

const CAR_REQUEST_JSON: &str = r#"{
    "alternatives": ["Sedan", "Coupe", "Wagon"],
    "criteria": [
        { "name": "Price", "kind": "quantitative", "characteristic": "higher_is_worse" },
        { "name": "Power", "kind": "quantitative", "characteristic": "higher_is_better" },
        { "name": "Comfort", "kind": "qualitative", "characteristic": "higher_is_better" }
    ],
    "criteria_judgments": [
        { "more": "Price", "less": "Power", "value": "3" },
        { "more": "Price", "less": "Comfort", "value": "5" },
        { "more": "Power", "less": "Comfort", "value": "3" }
    ],
    "qualitative_scales": [
        {
            "criterion": "Comfort",
            "values": ["High", "Medium", "Low"],
            "judgments": [
                { "more": "High", "less": "Medium", "value": "3" },
                { "more": "High", "less": "Low", "value": "5" },
                { "more": "Medium", "less": "Low", "value": "3" }
            ]
        }
    ],
    "cells": {
        "Sedan": { "Price": 20000, "Power": 150, "Comfort": "High" },
        "Coupe": { "Price": 35000, "Power": 300, "Comfort": "Low" },
        "Wagon": { "Price": 25000, "Power": 140, "Comfort": "Medium" }
    }
}"#;

const CAR_REQUEST_YAML: &str = r#"
alternatives: [Sedan, Coupe]
criteria:
  - name: Price
    characteristic: higher_is_worse
  - name: Comfort
    kind: qualitative
criteria_judgments:
  - { more: Price, less: Comfort, value: "1/2" }
qualitative_scales:
  - criterion: Comfort
    values: [Good, Poor]
    judgments:
      - { more: Good, less: Poor, value: "7" }
cells:
  Sedan: { Price: 20000, Comfort: Good }
  Coupe: { Price: 18000, Comfort: Poor }
"#;

const INCONSISTENT_ASSESSMENT_JSON: &str = r#"{
    "items": ["A", "B", "C"],
    "judgments": [
        { "more": "A", "less": "B", "value": "9" },
        { "more": "B", "less": "C", "value": "9" },
        { "more": "A", "less": "C", "value": "1/9" }
    ]
}"#;

fn request_file(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn cli() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_ahp-engine"));
    command
        .env_remove("AHP_ENGINE__ENGINE__CONSISTENCY_THRESHOLD")
        .env_remove("AHP_ENGINE__ENGINE__RECIPROCITY_TOLERANCE")
        .env("RUST_LOG", "off");
    command
}

// =============================================================================
// Handler Tests
// =============================================================================

#[test]
fn json_request_ranks_cars() {
    let cmd: EvaluateDecisionCommand = serde_json::from_str(CAR_REQUEST_JSON).unwrap();
    let engine = EngineConfig::default().build_engine();

    let event = EvaluateDecisionHandler::new(engine).handle(cmd).unwrap().event;

    // price dominates the criteria weights
    assert_eq!(event.criteria_weights[0].criterion, "Price");
    assert!(event.criteria_weights[0].weight > 0.5);
    assert_eq!(event.best_alternative.as_deref(), Some("Sedan"));
    assert_eq!(event.ranking[0].band, RankBand::Best);
    assert_eq!(event.qualitative_scales.len(), 1);
    assert!(event.consistency.ratio.value() < 10.0);
}

#[test]
fn yaml_request_matches_json_semantics() {
    let cmd: EvaluateDecisionCommand = serde_yaml::from_str(CAR_REQUEST_YAML).unwrap();
    let event = EvaluateDecisionHandler::new(AhpEngine::default())
        .handle(cmd)
        .unwrap()
        .event;

    // comfort carries twice the weight of price and the sedan is far more comfortable
    assert_eq!(event.best_alternative.as_deref(), Some("Sedan"));
    assert!((event.criteria_weights[1].weight - 2.0 / 3.0).abs() < 1e-12);
}

#[test]
fn assessment_reports_inconsistency() {
    let cmd: AssessJudgmentsCommand = serde_json::from_str(INCONSISTENT_ASSESSMENT_JSON).unwrap();
    let result = AssessJudgmentsHandler::new(AhpEngine::default())
        .handle(cmd)
        .unwrap();

    assert!(!result.event.acceptable);
    assert!(result.event.consistency.ratio.value() > 600.0);
}

// =============================================================================
// CLI Tests
// =============================================================================

#[test]
fn cli_prints_report_as_json() {
    let request = request_file(".json", CAR_REQUEST_JSON);
    let output = cli().arg("evaluate").arg(request.path()).output().unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["best_alternative"], "Sedan");
    assert_eq!(report["ranking"].as_array().unwrap().len(), 3);
}

#[test]
fn cli_reads_yaml_by_extension() {
    let request = request_file(".yaml", CAR_REQUEST_YAML);
    let output = cli().arg("evaluate").arg(request.path()).output().unwrap();

    assert!(output.status.success());
}

#[test]
fn cli_assess_does_not_reject() {
    let request = request_file(".json", INCONSISTENT_ASSESSMENT_JSON);
    let output = cli().arg("assess").arg(request.path()).output().unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["acceptable"], false);
}

#[test]
fn cli_rejected_run_exits_with_two() {
    let request = request_file(
        ".json",
        &CAR_REQUEST_JSON.replace(
            r#"{ "more": "Power", "less": "Comfort", "value": "3" }"#,
            r#"{ "more": "Comfort", "less": "Power", "value": "9" }"#,
        ),
    );
    let output = cli().arg("evaluate").arg(request.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("CONSISTENCY_ERROR"), "stderr: {}", stderr);
    assert!(output.stdout.is_empty());
}

#[test]
fn cli_invalid_config_exits_with_one() {
    let request = request_file(".json", CAR_REQUEST_JSON);
    let output = cli()
        .env("AHP_ENGINE__ENGINE__CONSISTENCY_THRESHOLD", "0")
        .arg("evaluate")
        .arg(request.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn cli_config_file_loosens_threshold() {
    let mut config = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(config, "[engine]\nconsistency_threshold = 100.0").unwrap();
    let request = request_file(
        ".json",
        &CAR_REQUEST_JSON.replace(
            r#"{ "more": "Power", "less": "Comfort", "value": "3" }"#,
            r#"{ "more": "Comfort", "less": "Power", "value": "9" }"#,
        ),
    );

    let output = cli()
        .arg("--config")
        .arg(config.path())
        .arg("evaluate")
        .arg(request.path())
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
}

#[test]
fn cli_missing_request_fails() {
    let output = cli()
        .arg("evaluate")
        .arg("/nonexistent/request.json")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Cannot read request"));
}
