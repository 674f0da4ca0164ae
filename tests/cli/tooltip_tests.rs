use predicates::prelude::*;
use serde_json::Value;

use crate::common::Sandbox;

#[test]
fn nothing_shown_while_auto_mode_is_off() {
    Sandbox::new()
        .cmd()
        .args(["tooltip", "--rect", "10,200,100,20", "hello"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn shown_above_selection_with_three_rows() {
    let sandbox = Sandbox::new();
    sandbox.cmd().args(["prefs", "auto", "on"]).assert().success();

    let output = sandbox
        .cmd()
        .args(["tooltip", "--rect", "10,200,100,20", "--format", "json", "hello world"])
        .output()
        .expect("runs");
    let view: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(view["placement"]["anchor"], "above");
    assert_eq!(view["placement"]["left"], 60.0);
    assert_eq!(view["placement"]["top"], 190.0);
    assert_eq!(view["rows"].as_array().map(Vec::len), Some(3));
    assert_eq!(view["rows"][2]["value"], "2");
}

#[test]
fn flips_below_near_the_top() {
    let sandbox = Sandbox::new();
    sandbox.cmd().args(["prefs", "auto", "on"]).assert().success();
    sandbox
        .cmd()
        .args(["tooltip", "--rect", "0,20,100,10", "テキスト"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("@ left=50 top=40 (below)"));
}
