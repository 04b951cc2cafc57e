#![allow(non_snake_case)]

use super::*;
use std::io::Cursor;
use yar_transport::{HEADER_LEN, read_header};

#[test]
fn encode_request___valid_params___frames_message() {
    let frame = encode_request(1, "add", "[1,2]", &Envelope::default()).unwrap();

    assert_eq!(&frame[HEADER_LEN..], br#"{"i":1,"m":"add","p":[1,2]}"#);
    let header = read_header(&mut Cursor::new(&frame)).unwrap();
    assert_eq!(header.body_len as usize, frame.len() - HEADER_LEN + 8);
}

#[test]
fn encode_request___params_not_array___returns_error() {
    let result = encode_request(1, "add", r#"{"a":1}"#, &Envelope::default());

    assert!(result.unwrap_err().to_string().contains("--params"));
}

#[test]
fn encode_request___envelope___stamps_header() {
    let envelope = Envelope::new().with_provider("cli").with_token("secret");

    let frame = encode_request(3, "ping", "[]", &envelope).unwrap();
    let header = read_header(&mut Cursor::new(&frame)).unwrap();

    assert_eq!(header.provider_str(), "cli");
    assert_eq!(header.token_str(), "secret");
}

#[test]
fn encode_response___error_response___contains_members() {
    let frame = encode_response(7, -1, "null", "", "not found", &Envelope::default()).unwrap();

    assert_eq!(
        &frame[HEADER_LEN..],
        br#"{"i":7,"s":-1,"r":null,"o":"","e":"not found"}"#
    );
}

#[test]
fn encode_response___invalid_result___returns_error() {
    let result = encode_response(1, 0, "{oops", "", "", &Envelope::default());

    assert!(result.is_err());
}

#[test]
fn emit___to_file___writes_frame() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("req.yar");
    let frame = encode_request(1, "add", "[1]", &Envelope::default()).unwrap();

    emit(&frame, Some(&path)).unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), frame);
}
