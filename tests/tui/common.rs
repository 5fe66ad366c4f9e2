//! Common utilities for tests that drive the routerlab binary.

use std::io::Write;
use std::process::{Command, Stdio};

/// Config path that never exists, so runs use the built-in defaults.
const NO_CONFIG: &str = "/nonexistent/routerlab/config.toml";

fn command(args: &[&str]) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_routerlab"));
    cmd.args(["--config", NO_CONFIG])
        .args(args)
        .env("RUST_LOG", "warn");
    cmd
}

/// Runs the binary and returns (exit code, stdout, stderr).
pub fn run(args: &[&str]) -> (i32, String, String) {
    let output = command(args).output().expect("Failed to execute routerlab");

    (
        output.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    )
}

/// Runs the binary with `stdin` piped in.
pub fn run_with_stdin(args: &[&str], stdin: &str) -> (i32, String, String) {
    let mut child = command(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn routerlab");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");

    let output = child.wait_with_output().expect("Failed to wait for routerlab");
    (
        output.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    )
}
