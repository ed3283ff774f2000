//! Integration tests for `extmod list`

mod common;

use common::{create_module, run_extmod, TestProject};

#[test]
fn test_list_shows_discovered_modules() {
    let project = TestProject::new();
    create_module(&project, "intro", "spam");
    create_module(&project, "realpython", "fputs");

    let output = run_extmod(&project, &["list"]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("spam"));
    assert!(stdout.contains("fputs"));
    assert!(stdout.contains("0.1.0"));
}

#[test]
fn test_list_empty_project() {
    let project = TestProject::new();

    let output = run_extmod(&project, &["list"]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(
        stdout.contains("No module descriptors"),
        "list should report an empty project: {stdout}"
    );
}

#[test]
fn test_list_reports_broken_descriptor_as_warning() {
    let project = TestProject::new();
    create_module(&project, "good", "spam");
    project.create_dir("bad");
    project.create_file("bad/module.toml", "not toml [[[");

    let output = run_extmod(&project, &["list"]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "list stays informational: {stderr}");
    assert!(stdout.contains("spam"));
    assert!(
        stderr.contains("Malformed descriptor"),
        "broken descriptor should be warned about: {stderr}"
    );
}

#[test]
fn test_list_json_output() {
    let project = TestProject::new();
    create_module(&project, "intro", "spam");

    let output = run_extmod(&project, &["--json", "list"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value =
        serde_json::from_str(stdout.trim()).expect("JSON output should parse");
    let modules = parsed.as_array().expect("JSON output should be an array");
    assert_eq!(modules.len(), 1);
    assert_eq!(modules[0]["name"], "spam");
    assert_eq!(modules[0]["version"], "0.1.0");
}
