use predicates::prelude::*;
use serde_json::Value;

use crate::common::Sandbox;

#[test]
fn shows_help() {
    Sandbox::new()
        .cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("word_counter"));
}

#[test]
fn counts_arguments_as_json() {
    let output = Sandbox::new()
        .cmd()
        .args(["count", "--format", "json", "hello", "world"])
        .output()
        .expect("runs");
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(json["characterCount"], 11);
    assert_eq!(json["nonWhitespaceCharacterCount"], 10);
    assert_eq!(json["lineCount"], 1);
    assert_eq!(json["wordCount"], 2);
}

#[test]
fn counts_stdin_when_no_text_given() {
    let output = Sandbox::new()
        .cmd()
        .args(["count", "--format", "json"])
        .write_stdin("a\nb\nc")
        .output()
        .expect("runs");
    let json: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(json["lineCount"], 3);
}

#[test]
fn table_uses_japanese_labels_by_default() {
    Sandbox::new()
        .cmd()
        .args(["count", "こんにちは"])
        .assert()
        .success()
        .stdout(predicate::str::contains("文字数").and(predicate::str::contains("単語数")));
}

#[test]
fn lang_flag_overrides_stored_language() {
    Sandbox::new()
        .cmd()
        .args(["count", "--lang", "en", "hello"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No spaces").and(predicate::str::contains("文字数").not()));
}

#[test]
fn live_mode_rerenders_per_line() {
    let output = Sandbox::new()
        .cmd()
        .args(["live", "--format", "json"])
        .write_stdin("hello\n:lang en\nworld\n")
        .output()
        .expect("runs");
    assert!(output.status.success());
    let frames: Vec<Value> = String::from_utf8(output.stdout)
        .expect("utf-8")
        .lines()
        .map(|l| serde_json::from_str(l).expect("each line is json"))
        .collect();

    // 初期表示, "hello\n", 言語切替, "hello\nworld\n"
    assert_eq!(frames.len(), 4);
    assert_eq!(frames[0]["rows"][0]["value"], "0");
    assert_eq!(frames[1]["rows"][2]["value"], "2");
    assert_eq!(frames[2]["language"], "en");
    assert_eq!(frames[3]["rows"][0]["label"], "Characters");
    assert_eq!(frames[3]["rows"][2]["value"], "3");
    assert_eq!(frames[3]["rows"][3]["value"], "2");
}

#[test]
fn live_lang_flag_sets_starting_language_without_saving() {
    let sandbox = Sandbox::new();
    let output = sandbox
        .cmd()
        .args(["live", "--format", "json", "--lang", "en"])
        .write_stdin("hello\n")
        .output()
        .expect("runs");
    assert!(output.status.success());
    let first: Value = String::from_utf8(output.stdout)
        .expect("utf-8")
        .lines()
        .next()
        .map(|l| serde_json::from_str(l).expect("json frame"))
        .expect("at least one frame");
    assert_eq!(first["language"], "en");
    assert_eq!(first["rows"][0]["label"], "Characters");
    assert!(!sandbox.prefs_path().exists());
}

#[test]
fn invalid_utf8_on_stdin_is_replaced() {
    let output = Sandbox::new()
        .cmd()
        .args(["count", "--format", "json"])
        .write_stdin(vec![b'a', 0xFF, b'b'])
        .output()
        .expect("runs");
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(json["characterCount"], 3);
}

#[test]
fn rejects_unknown_language() {
    Sandbox::new()
        .cmd()
        .args(["count", "--lang", "fr", "x"])
        .assert()
        .failure();
}
