use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_task-tracker"));
    cmd.env_remove("TASK_TRACKER_FILE")
        .env_remove("TASK_TRACKER_IMPORTANT_PRIORITY")
        .env_remove("TASK_TRACKER_SORT")
        .env("RUST_LOG", "off");
    cmd
}

fn run(file: &Path, args: &[&str]) -> Output {
    bin().arg("--file").arg(file).args(args).output().expect("run")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn add_title_cases_and_persists_csv() {
    let dir = TempDir::new().expect("temp dir");
    let file = dir.path().join("tasks.csv");

    let output = run(&file, &["add", "write essay", "history", "2"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Write Essay (History, priority 2) added to tasks."));
    assert!(stdout(&output).contains("Tasks to complete: 1"));

    let content = std::fs::read_to_string(&file).expect("read");
    assert_eq!(content, "Write Essay,History,2,u\n");
}

#[test]
fn add_rejects_bad_priority_without_writing() {
    let dir = TempDir::new().expect("temp dir");
    let file = dir.path().join("tasks.csv");

    let output = run(&file, &["add", "essay", "history", "abc"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Please enter a valid number"));

    let output = run(&file, &["add", "essay", "history", "0"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Priority must be > 0"));

    assert!(!file.exists());
}

#[test]
fn list_sorts_and_prints_json() {
    let dir = TempDir::new().expect("temp dir");
    let file = dir.path().join("tasks.csv");
    std::fs::write(&file, "Essay,History,3,u\nLab,Chemistry,1,c\nRead,English,2,u\n")
        .expect("write");

    let output = run(&file, &["list", "--sort", "Priority", "--json"]);
    assert!(output.status.success());
    let records: Value = serde_json::from_str(&stdout(&output)).expect("json");
    let names: Vec<&str> = records
        .as_array()
        .expect("array")
        .iter()
        .map(|r| r["name"].as_str().expect("name"))
        .collect();
    assert_eq!(names, vec!["Lab", "Read", "Essay"]);

    let output = run(&file, &["list"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with("Tasks to complete: 2\n"));
    assert!(text.contains("  1. Essay for History (priority 3)\n"));
    assert!(text.contains("  3. Lab for Chemistry (priority 1) (completed)\n"));
}

#[test]
fn list_unknown_sort_fails() {
    let dir = TempDir::new().expect("temp dir");
    let file = dir.path().join("tasks.csv");

    let output = run(&file, &["list", "--sort", "Colour"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown sort attribute: Colour"));
}

#[test]
fn toggle_and_clear_completed() {
    let dir = TempDir::new().expect("temp dir");
    let file = dir.path().join("tasks.json");
    assert!(run(&file, &["add", "essay", "history", "1"]).status.success());
    assert!(run(&file, &["add", "reading", "english", "5"]).status.success());

    let output = run(&file, &["toggle", "1", "--sort", "Name"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("You completed Essay. Great work!"));

    let output = run(&file, &["toggle", "9"]);
    assert!(!output.status.success());

    let output = run(&file, &["clear-completed"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("All completed tasks removed."));
    assert!(stdout(&output).contains("Tasks to complete: 1"));

    let saved: Value =
        serde_json::from_str(&std::fs::read_to_string(&file).expect("read")).expect("json");
    assert_eq!(saved.as_array().expect("array").len(), 1);
    assert_eq!(saved[0]["name"], "Reading");
}

#[test]
fn malformed_file_is_reported() {
    let dir = TempDir::new().expect("temp dir");
    let file = dir.path().join("tasks.csv");
    std::fs::write(&file, "Essay,History,abc,u\n").expect("write");

    let output = run(&file, &["list"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load tasks"));
    assert!(stderr.contains("invalid priority 'abc'"));

    let output = run(&file, &["add", "lab", "chemistry", "1"]);
    assert!(!output.status.success());
    assert_eq!(
        std::fs::read_to_string(&file).expect("read"),
        "Essay,History,abc,u\n"
    );
}
