//! End-to-end tests driving the `yar` binary.

#![allow(non_snake_case)]

use std::process::Command;
use tempfile::TempDir;

fn yar() -> Command {
    Command::new(env!("CARGO_BIN_EXE_yar"))
}

#[test]
fn encode_request___then_inspect___shows_request() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("add.yar");

    let status = yar()
        .args(["encode-request", "--id", "1", "--method", "add", "--params", "[1,2]"])
        .arg("--out")
        .arg(&path)
        .status()
        .unwrap();
    assert!(status.success());

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[90..], br#"{"i":1,"m":"add","p":[1,2]}"#);

    let output = yar().arg("inspect").arg(&path).arg("--validate").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("id:        1"));
    assert!(stdout.contains("packager:  JSON"));
}

#[test]
fn encode_response___negative_status___is_accepted() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("err.yar");

    let status = yar()
        .args(["encode-response", "--id", "7", "--status", "-1", "--error", "not found"])
        .arg("--out")
        .arg(&path)
        .status()
        .unwrap();
    assert!(status.success());

    let bytes = std::fs::read(&path).unwrap();
    let body = std::str::from_utf8(&bytes[90..]).unwrap();
    assert!(body.contains(r#""s":-1"#));
    assert!(body.contains(r#""e":"not found""#));
}

#[test]
fn encode_request___config_file___stamps_provider() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("yar.toml");
    std::fs::write(&config, "provider = \"gateway\"\ntoken = \"t\"\n").unwrap();
    let path = dir.path().join("req.yar");

    let status = yar()
        .arg("--config")
        .arg(&config)
        .args(["encode-request", "--id", "2", "--method", "ping"])
        .arg("--out")
        .arg(&path)
        .status()
        .unwrap();
    assert!(status.success());

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[14..21], b"gateway");
    assert_eq!(bytes[46], b't');
}

#[test]
fn encode_request___invalid_params___fails() {
    let output = yar()
        .args(["encode-request", "--id", "1", "--method", "add", "--params", "nope"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--params"));
}

#[test]
fn inspect___missing_file___fails() {
    let output = yar().args(["inspect", "/nonexistent/file.yar"]).output().unwrap();

    assert!(!output.status.success());
}
