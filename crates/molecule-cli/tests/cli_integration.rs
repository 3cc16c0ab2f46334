//! CLI integration tests for the `molecule` binary.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn molecule() -> Command {
    cargo_bin_cmd!("molecule")
}

#[test]
fn help_lists_subcommands() {
    molecule()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("parse").and(predicate::str::contains("validate")));
}

#[test]
fn parse_emits_json_object() {
    molecule()
        .args(["parse", "Mg(OH)2"])
        .assert()
        .success()
        .stdout("{\"H\":2,\"Mg\":1,\"O\":2}\n");
}

#[test]
fn parse_one_line_per_formula() {
    molecule()
        .args(["parse", "H2O", "(NO)3"])
        .assert()
        .success()
        .stdout("{\"H\":2,\"O\":1}\n{\"N\":3,\"O\":3}\n");
}

#[test]
fn parse_text_output() {
    molecule()
        .args(["parse", "--text", "H2O"])
        .assert()
        .success()
        .stdout("H2O\n  H: 2\n  O: 1\n");
}

#[test]
fn parse_failure_exits_nonzero() {
    molecule()
        .args(["parse", "--", "-"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bad character '-'"));
}

#[test]
fn parse_reports_delimiter_mismatch() {
    molecule()
        .args(["parse", "(NO"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("delimiter mismatch"));
}

#[test]
fn validate_reports_each_formula() {
    molecule()
        .args(["validate", "K4[ON(SO3)2]2", "{NO)3"])
        .assert()
        .failure()
        .stdout("K4[ON(SO3)2]2: ok\n")
        .stderr(predicate::str::contains("{NO)3: delimiter mismatch"));
}

#[test]
fn validate_ignores_stray_characters() {
    molecule()
        .args(["validate", "H2-O"])
        .assert()
        .success()
        .stdout("H2-O: ok\n");
}

#[test]
fn parse_large_count_as_string() {
    molecule()
        .args(["parse", "H99999999999999999999"])
        .assert()
        .success()
        .stdout("{\"H\":\"99999999999999999999\"}\n");
}
