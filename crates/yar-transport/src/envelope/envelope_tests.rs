#![allow(non_snake_case)]

use super::*;

#[test]
fn Envelope___default___leaves_header_fields_zeroed() {
    let mut header = Header::for_body(1, 0).unwrap();

    Envelope::default().apply(&mut header);

    assert_eq!(header.provider, [0u8; 32]);
    assert_eq!(header.token, [0u8; 32]);
}

#[test]
fn Envelope___with_provider_and_token___stamps_header() {
    let envelope = Envelope::new().with_provider("php-client").with_token("t0k3n");
    let mut header = Header::for_body(1, 0).unwrap();

    envelope.apply(&mut header);

    assert_eq!(header.provider_str(), "php-client");
    assert_eq!(header.token_str(), "t0k3n");
}

#[test]
fn Envelope___from_config___copies_provider_and_token() {
    let config = CodecConfig::new().with_provider("svc").with_token("tok");

    let envelope = Envelope::from_config(&config);

    assert_eq!(envelope.provider.as_deref(), Some("svc"));
    assert_eq!(envelope.token.as_deref(), Some("tok"));
}

#[test]
fn Envelope___from_default_config___is_empty() {
    let envelope = Envelope::from_config(&CodecConfig::default());

    assert_eq!(envelope, Envelope::new());
}
