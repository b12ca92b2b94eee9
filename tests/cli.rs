//! End-to-end tests for the `signalflow-cli` binary.
#![cfg(feature = "cli")]

use std::io::Write;
use std::process::{Command, Stdio};

fn run_interactive(input: &str) -> String {
    let mut child = Command::new(env!("CARGO_BIN_EXE_signalflow-cli"))
        .args(["--empty", "--human"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to start signalflow-cli");
    // The session may end before all input is read, closing the pipe early.
    let _ = child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes());
    let output = child.wait_with_output().expect("signalflow-cli did not finish");
    assert!(output.status.success());
    String::from_utf8(output.stdout).expect("stdout is UTF-8")
}

#[test]
fn test_interactive_session_until_end_of_input() {
    let stdout = run_interactive("drop condition 100 50\n\ndrop signal 400 50\nconnect condition_1 signal_2\n");

    assert!(stdout.contains("> Command: "));
    assert!(!stdout.contains("[default"));
    assert!(stdout.contains("dropped 'condition' as 'condition_1'"));
    assert!(stdout.contains("connected condition_1 -> signal_2"));
}

#[test]
fn test_interactive_quit() {
    let stdout = run_interactive("quit\ndrop signal 0 0\n");
    assert!(!stdout.contains("dropped"));
}
