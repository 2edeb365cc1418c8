//! Smoke tests for the `cutrange` binary.
#![expect(clippy::expect_used, reason = "tests fail loudly on harness errors")]

use assert_cmd::Command;
use std::process::Output;
use std::str;

fn cutrange() -> Command {
    let mut command = Command::cargo_bin("cutrange").expect("binary exists");
    command
        .env_remove("CUTRANGE_LOG_LEVEL")
        .env_remove("CUTRANGE_DEFAULT_RANGE");
    command
}

fn stdout(output: &Output) -> &str {
    str::from_utf8(&output.stdout).expect("utf8")
}

fn stderr(output: &Output) -> &str {
    str::from_utf8(&output.stderr).expect("utf8")
}

#[test]
fn check_accepts_values_within_range() {
    let output = cutrange()
        .args(["check", "--range", "'a'...'z', tab", "97", "9"])
        .output()
        .expect("runs");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "ok 97\nok 9\n");
}

#[test]
fn check_exits_with_one_on_rejection() {
    let output = cutrange()
        .args(["check", "--range", "1...40", "--name", "length", "41"])
        .output()
        .expect("runs");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "error length is 41 but must be within range: '1:40'\n"
    );
}

#[test]
fn check_reads_stdin_when_no_values_are_given() {
    let output = cutrange()
        .args(["check", "--range", "0x0...0xff"])
        .write_stdin("16\n0x100\n")
        .output()
        .expect("runs");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "ok 16\nerror <stdin>:2:1: value is 256 but must be within range: '0:255'\n"
    );
}

#[test]
fn unreadable_stdin_reports_line_and_cause() {
    let output = cutrange()
        .args(["check", "--range", "1...3"])
        .write_stdin(&b"1\n\xff\n"[..])
        .output()
        .expect("runs");
    assert_eq!(output.status.code(), Some(2));
    let message = stderr(&output);
    assert!(
        message.starts_with("error: failed to read values from stdin: failed to read line 2: "),
        "{message}"
    );
    assert!(message.contains("UTF-8"), "{message}");
}

#[test]
fn malformed_range_exits_with_two() {
    let output = cutrange()
        .args(["check", "--range", "5...1", "3"])
        .output()
        .expect("runs");
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
    assert_eq!(
        stderr(&output),
        "error: invalid range: lower range 5 must be less than or equal to upper range 1\n"
    );
}

#[test]
fn render_prints_canonical_form() {
    let output = cutrange()
        .args(["render", "--range", "-3...-1, 2, 10\u{2026}"])
        .output()
        .expect("runs");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "-3:-1, 2, 10:\n");
}

#[test]
fn render_uses_default_from_environment() {
    let output = cutrange()
        .env("CUTRANGE_DEFAULT_RANGE", "cr, lf")
        .arg("render")
        .output()
        .expect("runs");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "13, 10\n");
}

#[test]
fn blank_default_in_environment_is_rejected() {
    let output = cutrange()
        .env("CUTRANGE_DEFAULT_RANGE", "  ")
        .arg("render")
        .output()
        .expect("runs");
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        stderr(&output),
        "error: invalid configuration: default range must not be blank \
         (set CUTRANGE_DEFAULT_RANGE or --default)\n"
    );
}

#[test]
fn default_flag_overrides_blank_environment() {
    let output = cutrange()
        .env("CUTRANGE_DEFAULT_RANGE", " ")
        .args(["render", "--default", "5"])
        .output()
        .expect("runs");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "5\n");
}

#[test]
fn empty_default_flag_is_a_configuration_error() {
    let output = cutrange()
        .args(["render", "--default", ""])
        .output()
        .expect("runs");
    assert_eq!(output.status.code(), Some(2));
    assert!(
        stderr(&output).starts_with("error: invalid configuration:"),
        "{}",
        stderr(&output)
    );
}

#[test]
fn symbols_lists_ascii_names() {
    let output = cutrange().arg("symbols").output().expect("runs");
    assert!(output.status.success());
    let listing = stdout(&output);
    assert!(listing.lines().any(|line| line == "tab 9"));
    assert!(listing.lines().any(|line| line == "del 127"));
}
