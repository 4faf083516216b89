// Regression tests: CLI output and miette diagnostics
// Requires: assert_cmd, predicates crates in [dev-dependencies]

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

fn selkit() -> Command {
    Command::cargo_bin("selkit").unwrap()
}

#[test]
fn cli_build_prints_compound_selector() {
    selkit()
        .args(["build", "--element", "a", "--attr", r#"href$=".png""#])
        .args(["--pseudo-class", "focus"])
        .assert()
        .success()
        .stdout(contains(r#"a[href$=".png"]:focus"#));
}

#[test]
fn cli_build_reports_duplicate_id() {
    selkit()
        .args(["build", "--id", "x", "--id", "y"])
        .assert()
        .failure()
        .stderr(contains("selkit::duplicate_field").and(contains("id")));
}

#[test]
fn cli_build_requires_a_fragment() {
    selkit().arg("build").assert().failure();
}

#[test]
fn cli_render_reads_stdin() {
    let json = r#"{"kind":"combined","left":{"kind":"simple","tag":"tr"},"combinator":" ","right":{"kind":"simple","tag":"td"}}"#;
    selkit()
        .arg("render")
        .write_stdin(json)
        .assert()
        .success()
        .stdout(contains("tr   td"));
}

#[test]
fn cli_render_rejects_bad_combinator() {
    let json = r#"{"kind":"combined","left":{"kind":"simple","tag":"a"},"combinator":"|","right":{"kind":"simple","tag":"b"}}"#;
    selkit()
        .args(["render", "-"])
        .write_stdin(json)
        .assert()
        .failure()
        .stderr(contains("selkit::json"));
}

#[test]
fn cli_render_missing_file() {
    selkit()
        .args(["render", "tests/no_such_selector.json"])
        .assert()
        .failure()
        .stderr(contains("selkit::io"));
}

#[test]
fn cli_rect_prints_json_and_area() {
    selkit()
        .args(["rect", "--width", "10", "--height", "20"])
        .assert()
        .success()
        .stdout(contains(r#"{"width":10,"height":20}"#));
    selkit()
        .args(["rect", "--width", "10", "--height", "20", "--area"])
        .assert()
        .success()
        .stdout(contains("200"));
}
