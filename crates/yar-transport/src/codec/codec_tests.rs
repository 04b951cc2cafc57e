#![allow(non_snake_case)]

use super::*;
use serde::Deserialize;
use std::collections::HashMap;
use test_case::test_case;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct TestMessage {
    id: u64,
    name: String,
}

// JsonCodec tests

#[test]
fn JsonCodec___encode_decode___roundtrip_preserves_data() {
    let codec = JsonCodec::new();
    let original = TestMessage {
        id: 42,
        name: "test".to_string(),
    };

    let encoded = codec.encode(&original).unwrap();
    let decoded: TestMessage = codec.decode(&encoded).unwrap();

    assert_eq!(original, decoded);
}

#[test]
fn JsonCodec___default___output_is_compact() {
    let codec = JsonCodec::default();
    let msg = TestMessage {
        id: 1,
        name: "test".to_string(),
    };

    let encoded = codec.encode(&msg).unwrap();

    assert_eq!(encoded, br#"{"id":1,"name":"test"}"#);
}

#[test]
fn JsonCodec___decode___invalid_json_returns_deserialization_error() {
    let codec = JsonCodec::new();

    let result: YarResult<TestMessage> = codec.decode(b"invalid json");

    assert!(matches!(result, Err(YarError::Deserialization(_))));
}

#[test]
fn JsonCodec___encode___non_string_map_keys_return_serialization_error() {
    let codec = JsonCodec::new();
    let mut value = HashMap::new();
    value.insert((1, 2), "pair");

    let result = codec.encode(&value);

    assert!(matches!(result, Err(YarError::Serialization(_))));
}

#[test]
fn JsonCodec___packager___is_json() {
    assert!(JsonCodec::new().packager().equal("JSON"));
}

// codec_for tests

#[test_case("JSON")]
#[test_case("JSONRPC")]
fn codec_for___json_packager___returns_json_codec(tag: &str) {
    let result = codec_for(&Packager::new(tag));

    assert!(result.is_ok());
}

#[test_case("PHP")]
#[test_case("JS")]
#[test_case("MSGPACK")]
#[test_case("")]
fn codec_for___other_packager___returns_unsupported(tag: &str) {
    let result = codec_for(&Packager::new(tag));

    match result {
        Err(YarError::UnsupportedPackager(name)) => assert_eq!(name, tag),
        other => panic!("expected UnsupportedPackager, got {other:?}"),
    }
}
