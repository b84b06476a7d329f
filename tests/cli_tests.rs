//! Integration tests for the yxflow CLI
//!
//! These tests run the actual binary over temp workflow record files and
//! verify output.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get the binary to test
fn yxflow_cmd() -> Command {
    Command::cargo_bin("yxflow").unwrap()
}

/// Write a workflow records file into a temp dir, return its path
fn write_workflow(dir: &TempDir, yaml: &str) -> PathBuf {
    let path = dir.path().join("workflow.yaml");
    fs::write(&path, yaml).unwrap();
    path
}

const CHAIN_WORKFLOW: &str = r#"
nodes:
  - tool_id: "1"
    tool_type: DbFileInput
  - tool_id: "2"
    tool_type: Formula
  - tool_id: "3"
    tool_type: Summarize
connections:
  - source_tool_id: "1"
    target_tool_id: "2"
  - source_tool_id: "2"
    target_tool_id: "3"
"#;

const NESTED_CONTAINER_WORKFLOW: &str = r#"
nodes:
  - tool_id: "10"
    tool_type: Toolcontainer
  - tool_id: "11"
    tool_type: Formula
    container_id: "10"
  - tool_id: "12"
    tool_type: Toolcontainer
    container_id: "11"
  - tool_id: "13"
    tool_type: AlteryxSelect
    container_id: "12"
"#;

#[test]
fn help_shows_about_line() {
    yxflow_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "dependency-order resolver for Alteryx workflows",
        ));
}

// ============================================================================
// children
// ============================================================================

#[test]
fn children_flattens_nested_containers() {
    let dir = TempDir::new().unwrap();
    let file = write_workflow(&dir, NESTED_CONTAINER_WORKFLOW);

    yxflow_cmd()
        .args(["children", file.to_str().unwrap(), "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[11, 12, 13]"));
}

#[test]
fn children_unknown_container_reports_none_found() {
    let dir = TempDir::new().unwrap();
    let file = write_workflow(&dir, NESTED_CONTAINER_WORKFLOW);

    yxflow_cmd()
        .args(["children", file.to_str().unwrap(), "999"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No child tools found for container '999'",
        ));
}

#[test]
fn children_json_format() {
    let dir = TempDir::new().unwrap();
    let file = write_workflow(&dir, NESTED_CONTAINER_WORKFLOW);

    yxflow_cmd()
        .args(["children", file.to_str().unwrap(), "10", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"["11","12","13"]"#));
}

#[test]
fn children_containment_cycle_fails() {
    let dir = TempDir::new().unwrap();
    let file = write_workflow(
        &dir,
        r#"
nodes:
  - tool_id: "10"
    tool_type: Toolcontainer
    container_id: "11"
  - tool_id: "11"
    tool_type: Toolcontainer
    container_id: "10"
"#,
    );

    yxflow_cmd()
        .args(["children", file.to_str().unwrap(), "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("YX-020"))
        .stderr(predicate::str::contains("Fix:"));
}

// ============================================================================
// order
// ============================================================================

#[test]
fn order_prints_one_tool_per_line() {
    let dir = TempDir::new().unwrap();
    let file = write_workflow(&dir, CHAIN_WORKFLOW);

    yxflow_cmd()
        .args(["order", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("1\n2\n3"));
}

#[test]
fn order_json_format() {
    let dir = TempDir::new().unwrap();
    let file = write_workflow(&dir, CHAIN_WORKFLOW);

    yxflow_cmd()
        .args(["order", file.to_str().unwrap(), "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"["1","2","3"]"#));
}

#[test]
fn order_dependency_cycle_fails_with_members() {
    let dir = TempDir::new().unwrap();
    let file = write_workflow(
        &dir,
        r#"
nodes:
  - tool_id: "1"
    tool_type: Formula
  - tool_id: "2"
    tool_type: Formula
connections:
  - source_tool_id: "1"
    target_tool_id: "2"
  - source_tool_id: "2"
    target_tool_id: "1"
"#,
    );

    yxflow_cmd()
        .args(["order", file.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("YX-030"))
        .stderr(predicate::str::contains("1, 2"));
}

#[test]
fn order_dangling_connection_fails_naming_the_id() {
    let dir = TempDir::new().unwrap();
    let file = write_workflow(
        &dir,
        r#"
nodes:
  - tool_id: "1"
    tool_type: Formula
connections:
  - source_tool_id: "1"
    target_tool_id: "99"
"#,
    );

    yxflow_cmd()
        .args(["order", file.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("YX-010"))
        .stderr(predicate::str::contains("'99'"));
}

// ============================================================================
// project
// ============================================================================

#[test]
fn project_reorders_typed_ids() {
    let dir = TempDir::new().unwrap();
    let file = write_workflow(&dir, CHAIN_WORKFLOW);

    yxflow_cmd()
        .args(["project", file.to_str().unwrap(), "3, 1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[1, 3]"));
}

#[test]
fn project_tolerates_brackets_and_quotes() {
    let dir = TempDir::new().unwrap();
    let file = write_workflow(&dir, CHAIN_WORKFLOW);

    yxflow_cmd()
        .args(["project", file.to_str().unwrap(), "['3', \"2\", 3]"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[2, 3]"));
}

#[test]
fn project_unknown_id_fails_with_typo_hint() {
    let dir = TempDir::new().unwrap();
    let file = write_workflow(&dir, CHAIN_WORKFLOW);

    yxflow_cmd()
        .args(["project", file.to_str().unwrap(), "1, 999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("YX-040"))
        .stderr(predicate::str::contains("'999'"))
        .stderr(predicate::str::contains("Fix:"));
}

#[test]
fn project_empty_id_list_fails() {
    let dir = TempDir::new().unwrap();
    let file = write_workflow(&dir, CHAIN_WORKFLOW);

    yxflow_cmd()
        .args(["project", file.to_str().unwrap(), "[]"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no tool IDs given"));
}

// ============================================================================
// validate
// ============================================================================

#[test]
fn validate_reports_structure_summary() {
    let dir = TempDir::new().unwrap();
    let file = write_workflow(&dir, NESTED_CONTAINER_WORKFLOW);

    yxflow_cmd()
        .args(["validate", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("is valid"))
        .stdout(predicate::str::contains("Tools: 4 (2 executable)"))
        .stdout(predicate::str::contains("Containers with members: 3"));
}

#[test]
fn validate_duplicate_tool_id_fails() {
    let dir = TempDir::new().unwrap();
    let file = write_workflow(
        &dir,
        r#"
nodes:
  - tool_id: "1"
    tool_type: Formula
  - tool_id: "1"
    tool_type: Formula
"#,
    );

    yxflow_cmd()
        .args(["validate", file.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("YX-011"));
}

#[test]
fn validate_missing_file_fails() {
    yxflow_cmd()
        .args(["validate", "does-not-exist.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn validate_malformed_yaml_fails() {
    let dir = TempDir::new().unwrap();
    let file = write_workflow(&dir, "nodes: [not: {valid");

    yxflow_cmd()
        .args(["validate", file.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("YAML"));
}
