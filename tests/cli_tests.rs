// Command-line contract of the rpncalc binary

use std::process::{Command, Output};

fn rpncalc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rpncalc"))
        .args(args)
        .output()
        .expect("Failed to run rpncalc")
}

#[test]
fn test_prints_result_with_six_decimals() {
    let output = rpncalc(&["2+3*4"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "14.000000\n");
    assert!(output.stderr.is_empty());
}

#[test]
fn test_quoted_whitespace() {
    let output = rpncalc(&["6 / 3 + 2 * 5"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "12.000000\n");
}

#[test]
fn test_missing_argument_is_usage_error() {
    let output = rpncalc(&[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage:"));
}

#[test]
fn test_invalid_token_exit_code() {
    let output = rpncalc(&["3+x"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("'x'"));
}

#[test]
fn test_division_by_zero_exit_code() {
    let output = rpncalc(&["5/0"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Division by zero"));
}

#[test]
fn test_extra_arguments_ignored() {
    let output = rpncalc(&["1+1", "ignored"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "2.000000\n");
}

#[cfg(unix)]
#[test]
fn test_non_utf8_argument_is_reported() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let output = Command::new(env!("CARGO_BIN_EXE_rpncalc"))
        .arg(OsStr::from_bytes(b"1+\xff"))
        .output()
        .expect("Failed to run rpncalc");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("not valid UTF-8"));
}
