//! Shared helpers for end-to-end tests: each test file drives the real
//! `lox` binary as a subprocess instead of calling library code directly,
//! so these tests exercise the CLI host exactly the way a user would.

// Each test file is compiled as a separate crate, so not all functions
// are used in every test file. This is expected behavior.
#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};

/// Returns the path to the `lox` binary built by cargo for these tests.
pub fn lox_binary() -> String {
    env!("CARGO_BIN_EXE_lox").to_string()
}

/// Writes `source` to a temporary `.lox` file and runs the binary on it.
pub fn run_script(source: &str) -> Output {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let script_path: PathBuf = dir.path().join("script.lox");
    let mut file = std::fs::File::create(&script_path).expect("failed to create script file");
    file.write_all(source.as_bytes())
        .expect("failed to write script file");

    Command::new(lox_binary())
        .arg(&script_path)
        .output()
        .expect("failed to run lox binary")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
