//! Tests for the `mask_demo` binary.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_demo(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_mask_demo"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn mask_demo");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait for mask_demo")
}

#[test]
fn test_masks_each_line() {
    let output = run_demo(&["--mask", "CPF"], "12345678901\n123456789\n123456789012345\n");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "123.456.789-01\n123.456.789\n123.456.789-01\n"
    );
}

#[test]
fn test_without_mask_echoes_input() {
    let output = run_demo(&[], "any text 12/34\n");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "any text 12/34\n");
}

#[test]
fn test_max_length_override_and_verbose() {
    let output = run_demo(
        &["--mask", "CURRENCY", "--max-length", "7", "--verbose"],
        "1234567\n",
    );
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "R$ 1.23\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[Info] CURRENCY: cut 12 chars to 7"), "stderr: {stderr}");
}

#[test]
fn test_unknown_mask_is_rejected() {
    let output = run_demo(&["--mask", "IBAN"], "");
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown mask: IBAN"));
}

#[test]
fn test_list_prints_registry() {
    let output = run_demo(&["--list"], "");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for id in ["CPF", "PHONE", "CEP", "NASCIMENTO", "CURRENCY"] {
        assert!(stdout.contains(id), "missing {id} in:\n{stdout}");
    }
}

#[test]
fn test_help() {
    let output = run_demo(&["--help"], "");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("mask_demo"));
}
