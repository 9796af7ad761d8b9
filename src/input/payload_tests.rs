use std::io::Cursor;

use super::*;

#[test]
fn read_payload_trims_whitespace() {
    let payload = read_payload(Cursor::new("\n  a,b\n1,2\n\n")).unwrap();
    assert_eq!(payload.as_str(), "a,b\n1,2");
}

#[test]
fn read_payload_of_blank_input_is_empty() {
    let payload = read_payload(Cursor::new(" \n\t")).unwrap();
    assert!(payload.is_empty());
}

#[test]
fn read_payload_rejects_invalid_utf8() {
    let err = read_payload(Cursor::new(vec![0xff, 0xfe, 0x00])).unwrap_err();
    assert!(matches!(err, SvegaError::Io(_)));
}
