use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::NamedTempFile;

fn aurora_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_aurora"))
}

fn run_session(script: &str) -> Output {
    let mut child = aurora_cmd()
        .args(["session"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(script.as_bytes())
        .unwrap();

    child.wait_with_output().unwrap()
}

#[test]
fn test_list_shows_demo_notes() {
    let output = aurora_cmd().args(["list"]).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("001 [demo]"));
    assert!(stdout.contains("010 [demo]"));
}

#[test]
fn test_list_user_is_empty_on_start() {
    let output = aurora_cmd().args(["list", "--user"]).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No notes found."));
}

#[test]
fn test_list_json() {
    let output = aurora_cmd().args(["list", "--json"]).output().unwrap();

    assert!(output.status.success());
    let notes: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let notes = notes.as_array().unwrap();
    assert_eq!(notes.len(), 10);
    assert_eq!(notes[0]["id"], 1);
    assert_eq!(notes[0]["origin"], "demo");
}

#[test]
fn test_search_json_doctor() {
    let output = aurora_cmd()
        .args(["search", "врач", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let results: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let results = results.as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["id"], 1);
    assert_eq!(results[0]["score"], 1.0);
    assert_eq!(results[1]["id"], 2);
}

#[test]
fn test_search_text_output() {
    let output = aurora_cmd().args(["search", "булки"]).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Found 1 notes for 'булки'"));
    assert!(stdout.contains("Купить свежие булки"));
}

#[test]
fn test_search_limit() {
    let output = aurora_cmd()
        .args(["search", "а", "--limit", "3", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let results: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(results.as_array().unwrap().len(), 3);
}

#[test]
fn test_search_default_cap_is_eight() {
    // every seed note contains the letter "а" somewhere
    let output = aurora_cmd()
        .args(["search", "а", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let results: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let scores: Vec<f64> = results
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["score"].as_f64().unwrap())
        .collect();
    assert_eq!(scores.len(), 8);
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_search_blank_query_fails() {
    for args in [vec!["search", "   ", "--json"], vec!["search", "   "]] {
        let output = aurora_cmd().args(&args).output().unwrap();

        assert!(!output.status.success());
        assert!(output.stdout.is_empty());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Search query must not be empty"));
    }
}

#[test]
fn test_search_zero_limit_fails() {
    let output = aurora_cmd()
        .args(["search", "врач", "--limit", "0"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("result_limit"));
}

#[test]
fn test_search_with_config_file() {
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "result_limit: 1").unwrap();

    let output = aurora_cmd()
        .args(["--config"])
        .arg(config.path())
        .args(["search", "врач", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let results: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(results.as_array().unwrap().len(), 1);
}

#[test]
fn test_missing_config_file_fails() {
    let output = aurora_cmd()
        .args(["--config", "/nonexistent/aurora.yaml", "config"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("IO error"));
}

#[test]
fn test_config_prints_defaults() {
    let output = aurora_cmd().args(["config"]).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("tag_weight: 0.8"));
    assert!(stdout.contains("result_limit: 8"));
}

#[test]
fn test_presets_and_stats() {
    let output = aurora_cmd().args(["presets"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("3. идея"));

    let output = aurora_cmd().args(["stats", "--json"]).output().unwrap();
    assert!(output.status.success());
    let stats: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stats["total"], 10);
    assert_eq!(stats["demo"], 10);
    assert_eq!(stats["user"], 0);
}

#[test]
fn test_full_session_workflow() {
    let output = run_session(
        "add --tags \"еда, магазин\" \"Купить молоко и сыр\"\n\
         search молоко\n\
         stats\n\
         delete 11\n\
         add \"Второй список покупок\"\n\
         list --user\n\
         quit\n",
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Saved note 011."));
    assert!(stdout.contains("Found 1 notes for 'молоко'"));
    assert!(stdout.contains("Your notes:  1"));
    assert!(stdout.contains("Deleted note 011."));
    // ids are not reused after a delete
    assert!(stdout.contains("Saved note 012."));
    assert!(stdout.contains("012 [user] Второй список покупок"));
}

#[test]
fn test_session_validation_does_not_abort() {
    let output = run_session("add\nsearch\ndelete 3\nstats\n");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Warning: enter the note text"));
    assert!(stdout.contains("Warning: enter a search query"));
    assert!(stdout.contains("demo note"));
    assert!(stdout.contains("Total notes: 10"));
}

#[test]
fn test_session_state_does_not_persist() {
    let output = run_session("add remember me\n");
    assert!(output.status.success());

    let output = run_session("list --user\n");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No notes found."));
}
