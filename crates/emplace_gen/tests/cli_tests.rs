#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
//! Exit-code contract of the `emplace-gen` binary.

use std::path::PathBuf;
use std::process::Command;

use emplace_gen::{generate_to_string, GenConfig, GENERATED_MARKER};
use pretty_assertions::assert_eq;

/// Path to the cargo-built `emplace-gen` binary.
fn gen_binary() -> PathBuf {
    let path = PathBuf::from(env!("CARGO_BIN_EXE_emplace-gen"));
    assert!(path.exists(), "emplace-gen binary not found at {}", path.display());
    path
}

fn command() -> Command {
    let mut cmd = Command::new(gen_binary());
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn any_argument_prints_usage_and_exits_2() {
    let output = command().arg("x").output().expect("failed to execute emplace-gen");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(2), "stderr: {stderr}");
    assert!(stderr.contains("Usage: emplace-gen"), "stderr: {stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn writes_default_constructors_to_stdout() {
    let output = command().output().expect("failed to execute emplace-gen");

    let stdout = String::from_utf8(output.stdout).expect("generated source is utf-8");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "stderr: {stderr}");
    assert!(stdout.starts_with(GENERATED_MARKER));
    assert_eq!(stdout, generate_to_string(&GenConfig::default()));
}

#[cfg(target_os = "linux")]
#[test]
fn full_device_fails_with_status_1() {
    use std::fs::OpenOptions;
    use std::process::Stdio;

    let full = OpenOptions::new()
        .write(true)
        .open("/dev/full")
        .expect("failed to open /dev/full");
    let output = command()
        .stdout(Stdio::from(full))
        .output()
        .expect("failed to execute emplace-gen");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1), "stderr: {stderr}");
    assert!(
        stderr.starts_with("error: failed to write generated source"),
        "stderr: {stderr}"
    );
}
