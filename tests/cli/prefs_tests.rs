use predicates::prelude::*;

use crate::common::Sandbox;

#[test]
fn defaults_when_file_missing() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["prefs", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("autoMode  false").and(predicate::str::contains("language  ja")));
    assert!(!sandbox.prefs_path().exists());
}

#[test]
fn writes_persist_between_runs() {
    let sandbox = Sandbox::new();
    sandbox.cmd().args(["prefs", "auto", "on"]).assert().success();
    sandbox.cmd().args(["prefs", "lang", "en"]).assert().success();

    sandbox
        .cmd()
        .args(["prefs", "show", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"autoMode\": true").and(predicate::str::contains("\"language\": \"en\"")));
}

#[test]
fn stored_language_drives_labels() {
    let sandbox = Sandbox::new();
    sandbox.cmd().args(["prefs", "lang", "en"]).assert().success();
    sandbox
        .cmd()
        .args(["count", "hello world"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Words"));
}

#[test]
fn corrupt_file_falls_back_to_defaults_for_counting() {
    let sandbox = Sandbox::new();
    std::fs::write(sandbox.prefs_path(), "{oops").expect("write");
    sandbox
        .cmd()
        .args(["count", "x"])
        .assert()
        .success()
        .stdout(predicate::str::contains("文字数"));
    sandbox.cmd().args(["prefs", "show"]).assert().failure();
}
