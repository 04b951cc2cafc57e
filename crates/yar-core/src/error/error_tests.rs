#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

fn serde_error() -> serde_json::Error {
    serde_json::from_str::<String>("invalid").unwrap_err()
}

#[test_case(YarError::Io(std::io::Error::other("boom")), 1)]
#[test_case(YarError::Serialization(serde_error()), 2)]
#[test_case(YarError::Deserialization("x".into()), 3)]
#[test_case(YarError::MissingParams, 4)]
#[test_case(YarError::UnsupportedPackager("PHP".into()), 5)]
#[test_case(YarError::InvalidMagic(0), 6)]
#[test_case(YarError::UnsupportedVersion(2), 7)]
#[test_case(YarError::BodyTooLarge { len: 10, max: 5 }, 8)]
#[test_case(YarError::InvalidFormat("x".into()), 9)]
#[test_case(YarError::ConfigError("x".into()), 10)]
fn YarError___variant___maps_to_correct_code(error: YarError, expected_code: u32) {
    assert_eq!(error.error_code(), expected_code);
}

#[test]
fn YarError___io___displays_underlying_error_verbatim() {
    let err: YarError = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed").into();

    assert_eq!(err.to_string(), "pipe closed");
    assert!(err.is_io());
    assert_eq!(err.as_io().map(|e| e.kind()), Some(std::io::ErrorKind::BrokenPipe));
}

#[test]
fn YarError___invalid_magic___displays_hex() {
    let err = YarError::InvalidMagic(0xDEADBEEF);

    assert_eq!(err.to_string(), "invalid magic number: 0xDEADBEEF");
}

#[test]
fn YarError___missing_params___displays_message() {
    assert_eq!(
        YarError::MissingParams.to_string(),
        "request body missing params"
    );
}

#[test]
fn YarError___non_io___as_io_returns_none() {
    let err = YarError::MissingParams;

    assert!(!err.is_io());
    assert!(err.as_io().is_none());
}
