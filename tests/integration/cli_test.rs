//! Integration tests for the prd2beads binary

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::{tempdir, TempDir};

fn run_prd2beads(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_prd2beads"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute prd2beads")
}

/// Temp project with `tasks/prd.json` holding `prd`
fn project_with_prd(prd: &str) -> TempDir {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("tasks")).unwrap();
    fs::write(dir.path().join("tasks/prd.json"), prd).unwrap();
    dir
}

#[test]
fn test_converts_conventional_paths_without_arguments() {
    let dir = project_with_prd(
        r#"{"project": "pnpm", "userStories": [
            {"id": "US-1", "title": "T", "description": "D", "priority": 1, "passes": false}
        ]}"#,
    );

    let output = run_prd2beads(dir.path(), &[]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let content = fs::read_to_string(dir.path().join("tasks/prd-beads.jsonl")).unwrap();
    assert!(content.ends_with('\n'));
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1);

    let issue: Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(issue["status"], "open");
    assert_eq!(issue["priority"], 0);
    assert_eq!(issue["labels"], serde_json::json!(["pnpm-migration"]));
    assert_eq!(issue["issue_type"], "task");
    assert_eq!(issue["blocks"], serde_json::json!([]));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Converted 1 user stories to beads format"));
    assert!(stdout.contains("Output: tasks/prd-beads.jsonl"));
    assert!(stdout.contains("bd import -i tasks/prd-beads.jsonl"));
}

#[test]
fn test_empty_user_stories_write_single_newline() {
    let dir = project_with_prd(r#"{"userStories": []}"#);

    let output = run_prd2beads(dir.path(), &[]);
    assert!(output.status.success());

    let content = fs::read_to_string(dir.path().join("tasks/prd-beads.jsonl")).unwrap();
    assert_eq!(content, "\n");
    assert!(String::from_utf8_lossy(&output.stdout).contains("Converted 0 user stories"));
}

#[test]
fn test_missing_input_fails_without_output() {
    let dir = tempdir().unwrap();

    let output = run_prd2beads(dir.path(), &[]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("PRD file not found"), "stderr: {}", stderr);
    assert!(!dir.path().join("tasks/prd-beads.jsonl").exists());
}

#[test]
fn test_malformed_input_fails_and_keeps_previous_output() {
    let dir = project_with_prd("{\"userStories\": [ {\"id\": } ]}");
    let out = dir.path().join("tasks/prd-beads.jsonl");
    fs::write(&out, "previous\n").unwrap();

    let output = run_prd2beads(dir.path(), &[]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("PRD parse error"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "previous\n");
}

#[test]
fn test_explicit_paths_and_quiet() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("stories.json"),
        r#"{"userStories": [{"id": "A-1", "title": "T", "description": "D", "passes": true}]}"#,
    )
    .unwrap();

    let output = run_prd2beads(
        dir.path(),
        &["--input", "stories.json", "--output", "out/issues.jsonl", "--label", "q3", "--quiet"],
    );
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let content = fs::read_to_string(dir.path().join("out/issues.jsonl")).unwrap();
    let issue: Value = serde_json::from_str(content.trim_end()).unwrap();
    assert_eq!(issue["status"], "closed");
    assert_eq!(issue["labels"], serde_json::json!(["q3"]));
}

#[test]
fn test_rerun_is_stable_apart_from_timestamps() {
    let dir = project_with_prd(
        r#"{"userStories": [
            {"id": "US-1", "title": "T", "description": "D", "acceptanceCriteria": ["A"]},
            {"id": "US-2", "title": "U", "description": "E", "dependsOn": ["US-1"], "priority": 3}
        ]}"#,
    );
    let out = dir.path().join("tasks/prd-beads.jsonl");

    let strip = |content: String| -> Vec<Value> {
        content
            .lines()
            .map(|line| {
                let mut issue: Value = serde_json::from_str(line).unwrap();
                let obj = issue.as_object_mut().unwrap();
                obj.remove("created_at");
                obj.remove("updated_at");
                issue
            })
            .collect()
    };

    assert!(run_prd2beads(dir.path(), &[]).status.success());
    let first = strip(fs::read_to_string(&out).unwrap());
    assert!(run_prd2beads(dir.path(), &[]).status.success());
    let second = strip(fs::read_to_string(&out).unwrap());

    assert_eq!(first, second);
}

#[test]
fn test_rust_log_enables_logs_without_verbose_flag() {
    let dir = project_with_prd(r#"{"userStories": [{"id": "US-1", "title": "T", "description": "D"}]}"#);

    let output = Command::new(env!("CARGO_BIN_EXE_prd2beads"))
        .current_dir(dir.path())
        .env("RUST_LOG", "debug")
        .output()
        .expect("Failed to execute prd2beads");
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("converting story"), "stderr: {}", stderr);
}

#[test]
fn test_verbose_logs_run_summary() {
    let dir = project_with_prd(
        r#"{"userStories": [
            {"id": "US-1", "title": "T", "description": "D", "passes": true},
            {"id": "US-2", "title": "T", "description": "D", "dependsOn": ["US-1"]}
        ]}"#,
    );

    let output = run_prd2beads(dir.path(), &["-v"]);
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("converted 2 issues (1 open, 1 closed, 1 with dependencies)"),
        "stderr: {}",
        stderr
    );
    assert!(!stderr.contains("converting story"));
}

#[test]
fn test_without_flags_or_rust_log_stderr_is_quiet() {
    let dir = project_with_prd(r#"{"userStories": [{"id": "US-1", "title": "T", "description": "D"}]}"#);

    let output = run_prd2beads(dir.path(), &[]);
    assert!(output.status.success());
    assert!(output.stderr.is_empty(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
}
