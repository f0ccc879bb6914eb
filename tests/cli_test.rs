//! End-to-end CLI tests: spawn the calc binary and check streams and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use rstest::rstest;

use calc::exitcode;

fn calc() -> Command {
    Command::cargo_bin("calc").unwrap()
}

#[rstest]
#[case(&["add", "2", "3"], "5.0")]
#[case(&["subtract", "5", "3"], "2.0")]
#[case(&["multiply", "2", "3"], "6.0")]
#[case(&["divide", "6", "3"], "2.0")]
fn test_cli_happy_paths(#[case] args: &[&str], #[case] expected: &str) {
    calc()
        .args(args)
        .assert()
        .code(exitcode::OK)
        .stdout(format!("{}\n", expected))
        .stderr("");
}

#[rstest]
fn test_cli_accepts_negative_and_fractional_operands() {
    calc()
        .args(["add", "-2.5", "0.5"])
        .assert()
        .code(exitcode::OK)
        .stdout("-2.0\n")
        .stderr("");
}

#[rstest]
fn test_cli_divide_by_zero_error() {
    calc()
        .args(["divide", "1", "0"])
        .assert()
        .code(exitcode::COMPUTE)
        .stdout("")
        .stderr(predicate::str::contains("Error: Cannot divide by zero."));
}

#[rstest]
fn test_cli_missing_operand_is_usage_error() {
    calc()
        .args(["add", "2"])
        .assert()
        .code(exitcode::USAGE)
        .stdout("")
        .stderr(predicate::str::contains("Usage"));
}

#[rstest]
fn test_cli_unknown_operation_is_usage_error() {
    calc()
        .args(["modulo", "2", "3"])
        .assert()
        .code(exitcode::USAGE)
        .stdout("")
        .stderr(predicate::str::contains("Usage"));
}

#[rstest]
fn test_cli_non_numeric_operand_is_usage_error() {
    calc()
        .args(["add", "two", "3"])
        .assert()
        .code(exitcode::USAGE)
        .stdout("")
        .stderr(predicate::str::contains("invalid value"));
}

#[rstest]
fn test_cli_no_operation_is_usage_error() {
    calc()
        .assert()
        .code(exitcode::USAGE)
        .stdout("")
        .stderr(predicate::str::contains("Usage"));
}
