//! End-to-end checks of the binary: exit codes, JSON output and input handling.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use serde_json::{json, Value};

fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_monkey-banana"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn run(args: &[&str]) -> Output {
    bin().args(args).output().expect("failed to run binary")
}

fn run_with_stdin(args: &[&str], input: &str) -> Output {
    let mut child = bin()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn binary");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_default_run_prints_demo() {
    let output = run(&[]);
    assert!(output.status.success());

    let text = String::from_utf8(output.stdout.clone()).unwrap();
    assert!(text.starts_with("MONKEY AND BANANA PROBLEM\n"));
    assert!(text.contains("GOAL ACHIEVED!"));
    assert!(stderr(&output).is_empty());
}

#[test]
fn test_solve_json_uses_fixed_start() {
    let output = run(&["solve", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let result = stdout_json(&output);
    assert_eq!(result["solved"], json!(true));
    assert_eq!(
        result["actions"],
        json!([
            {"type": "go_to", "to": "corner"},
            {"type": "push_box_to", "to": "under_banana"},
            {"type": "climb_box"},
            {"type": "grab_banana"}
        ])
    );
    assert_eq!(
        result["path"][0],
        json!({"monkey": "door", "box": "corner", "onBox": false, "hasBanana": false})
    );
    assert_eq!(result["path"].as_array().unwrap().len(), 5);

    // Search counters sit at the top level next to `solved`
    assert_eq!(result["statesExplored"], json!(32));
    assert_eq!(result["cyclesSkipped"], json!(18));
    assert_eq!(result["maxDepth"], json!(6));
}

#[test]
fn test_solve_json_unsolvable_exits_one() {
    // Perched on the box in the corner with no way down
    let output = run_with_stdin(
        &["solve", "--stdin", "--json"],
        r#"{"monkey": "corner", "box": "corner", "onBox": true}"#,
    );
    assert_eq!(output.status.code(), Some(1));

    let result = stdout_json(&output);
    assert_eq!(result["solved"], json!(false));
    assert_eq!(result["path"], Value::Null);
    assert_eq!(result["actions"], Value::Null);
    assert_eq!(result["statesExplored"], json!(0));
}

#[test]
fn test_solve_unknown_location_exits_one() {
    let output = run_with_stdin(&["solve", "--stdin"], r#"{"monkey": "door", "box": "ceiling"}"#);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let err = stderr(&output);
    assert!(err.contains("unknown location \"ceiling\""), "{err}");
    // Reported once, not once per sink
    assert_eq!(err.matches("ceiling").count(), 1, "{err}");
}

#[test]
fn test_solve_misspelled_key_exits_one() {
    let output = run_with_stdin(
        &["solve", "--stdin", "--json"],
        r#"{"monkey": "door", "box": "corner", "on_box": true}"#,
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("unknown field"));
}

#[test]
fn test_solve_reads_file() {
    let path = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("box_under_banana.json");
    std::fs::write(&path, r#"{"monkey": "under_banana", "box": "under_banana"}"#).unwrap();
    let file = path.to_str().unwrap();

    let output = run(&["solve", file, "--json"]);
    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output)["actions"],
        json!([{"type": "climb_box"}, {"type": "grab_banana"}])
    );

    let output = run(&["solve", file]);
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    assert!(text.contains("\nStep 1: Climbed onto the box\n"));
    assert!(text.contains("\nStep 2: Grabbed the banana!\n"));
}

#[test]
fn test_solve_missing_file_exits_one() {
    let output = run(&["solve", "/nonexistent/monkey-banana.json"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("failed to read initial state"));
}
