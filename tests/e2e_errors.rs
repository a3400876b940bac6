//! End-to-end tests for the error-reporting and exit-code contract:
//! static errors exit 65, runtime errors exit 70, and a usage error on
//! argument count exits 64, all driven through the real `lox` binary.

mod common;

use common::{lox_binary, run_script, stderr, stdout};
use std::process::Command;

#[test]
fn undefined_variable_exits_seventy_and_reports_the_line() {
    let output = run_script("print 1;\nprint missing;");
    assert_eq!(output.status.code(), Some(70));
    assert_eq!(stdout(&output), "1\n");
    let err = stderr(&output);
    assert!(err.contains("Undefined variable 'missing'."));
    assert!(err.contains("[line 2]"));
}

#[test]
fn type_error_on_addition_exits_seventy() {
    let output = run_script(r#"print 1 + "a";"#);
    assert_eq!(output.status.code(), Some(70));
    assert!(stderr(&output).contains("Operands must be two numbers or two strings."));
}

#[test]
fn syntax_error_exits_sixty_five_and_does_not_run_anything() {
    let output = run_script("var a = ;");
    assert_eq!(output.status.code(), Some(65));
    assert_eq!(stdout(&output), "");
    let err = stderr(&output);
    assert!(err.contains("[line 1] Error at ';'"));
}

#[test]
fn unterminated_string_is_a_lexer_error() {
    let output = run_script("print \"oops;");
    assert_eq!(output.status.code(), Some(65));
    assert!(stderr(&output).contains("Unterminated string."));
}

#[test]
fn a_static_error_takes_precedence_over_a_would_be_runtime_error() {
    // The second line's undefined variable would be a runtime error, but
    // the first line never parses, so nothing ever runs and the exit
    // code reflects the static error (65), not a runtime one (70).
    let output = run_script("var a = ;\nprint missing;");
    assert_eq!(output.status.code(), Some(65));
}

#[test]
fn well_formed_script_exits_zero() {
    let output = run_script("print \"ok\";");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "ok\n");
    assert_eq!(stderr(&output), "");
}

#[test]
fn too_many_arguments_exits_sixty_four_with_usage_message() {
    let output = Command::new(lox_binary())
        .arg("one")
        .arg("two")
        .output()
        .expect("failed to run lox binary");
    assert_eq!(output.status.code(), Some(64));
    assert!(stderr(&output).contains("Usage: lox [script]"));
}
