//! Run the `tensorcraft` binary as a user would.

use std::process::{Command, Output};

fn tensorcraft(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tensorcraft"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn prints_ready_marker() {
    let out = tensorcraft(&[]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "go\n");
}

#[test]
fn help_exits_successfully() {
    let out = tensorcraft(&["--help"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Inference server for ONNX models"), "{stdout}");
}

#[test]
fn ignores_positional_arguments() {
    let out = tensorcraft(&["run", "model.onnx"]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "go\n");
}

#[test]
fn failure_exits_with_status_1() {
    for args in [&["--bogus"][..], &["--version"], &["run", "--port", "80"]] {
        let out = tensorcraft(args);
        assert_eq!(out.status.code(), Some(1));
        let stdout = String::from_utf8_lossy(&out.stdout);
        assert!(!stdout.trim().is_empty());
        assert_ne!(stdout, "go\n");
    }
}
