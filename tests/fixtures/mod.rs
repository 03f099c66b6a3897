//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the travelplan binary
pub fn travelplan_bin() -> &'static str {
    env!("CARGO_BIN_EXE_travelplan")
}

/// Creates a Command with an isolated config directory.
///
/// Pass the same directory to several commands to share settings between them.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(travelplan_bin());
    cmd.env("TRAVELPLAN_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs a command in an isolated config directory and returns its output.
pub fn run(args: &[&str], config_dir: &Path) -> Output {
    isolated_command(args, config_dir)
        .output()
        .expect("Failed to execute command")
}

/// Creates an empty config directory.
pub fn temp_config_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Writes `config.toml` into `config_dir`.
pub fn write_config(config_dir: &Path, content: &str) -> PathBuf {
    let path = config_dir.join("config.toml");
    fs::write(&path, content).expect("Failed to write config file");
    path
}

/// Asserts an exit code, printing stderr on mismatch.
pub fn assert_exit(output: &Output, code: i32) {
    assert_eq!(
        output.status.code(),
        Some(code),
        "unexpected exit code. stdout: {} stderr: {}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Stdout as a string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Stderr as a string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
