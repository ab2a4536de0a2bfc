use std::{
    io::Write,
    process::{Command, Output, Stdio},
};

use pretty_assertions::assert_eq;

fn run(input: &str, args: &[&str]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_reckon")).args(args)
                                                             .stdin(Stdio::piped())
                                                             .stdout(Stdio::piped())
                                                             .stderr(Stdio::piped())
                                                             .spawn()
                                                             .expect("failed to spawn reckon");
    child.stdin
         .take()
         .expect("stdin is piped")
         .write_all(input.as_bytes())
         .expect("failed to write stdin");
    child.wait_with_output().expect("failed to wait for reckon")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).trim().to_string()
}

#[test]
fn integer_result_on_stdout() {
    let output = run("2 + 3\n", &[]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "5");
    assert_eq!(stderr(&output), "");
}

#[test]
fn negative_integer_result() {
    let output = run("100 - 101\n", &[]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "-1");
}

#[test]
fn float_flag_formats_four_digits() {
    let output = run("2.5 + 3.7\n", &["--float"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "6.2000");
    assert_eq!(stderr(&output), "");
}

#[test]
fn expression_argument_skips_stdin() {
    let output = run("", &["(2 + 3) * 4"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "20");
}

#[test]
fn invalid_character_fails() {
    let output = run("2 + a\n", &[]);
    assert!(!output.status.success());
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains("Invalid character 'a'"));
}

#[test]
fn unary_minus_fails() {
    let output = run("-5 + 3\n", &[]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Negative numbers are not supported"));
}

#[test]
fn division_by_zero_fails() {
    let output = run("1 / 0\n", &[]);
    assert!(!output.status.success());
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains("Division by zero"));
}

#[test]
fn out_of_range_result_fails() {
    let output = run("2000000000 + 1000000000\n", &[]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("out of range"));
}

#[test]
fn lenient_flag_ignores_trailing_input() {
    // Screening still demands balanced parentheses.
    let strict = run("(1 + 2) 3\n", &[]);
    assert!(!strict.status.success());

    let lenient = run("(1 + 2) 3\n", &["--lenient"]);
    assert!(lenient.status.success());
    assert_eq!(stdout(&lenient), "3");
}

#[test]
fn empty_stdin_fails() {
    let output = run("", &[]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("no input"));
}
