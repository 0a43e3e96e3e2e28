// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Sized-mode encoding into caller-provided buffers.

mod common;

use common::{catalog, populated};
use roboschema::msgs::builtin_interfaces::TIME;
use roboschema::msgs::sensor_msgs::IMAGE;
use roboschema::{encode, encode_sized, encoded_len, CdrCodec, EncapsulationKind, ErrorKind};

#[test]
fn test_query_returns_required_size() {
    for schema in catalog() {
        let msg = populated(schema, 8);
        assert_eq!(
            encode_sized(&msg, None).unwrap(),
            encode(&msg).unwrap().len(),
            "{}",
            schema.name
        );
    }
}

#[test]
fn test_exact_buffer_matches_encode() {
    for schema in catalog() {
        let msg = populated(schema, 12);
        let required = encoded_len(&msg).unwrap();
        let mut buf = vec![0u8; required];
        let written = encode_sized(&msg, Some(&mut buf[..])).unwrap();
        assert_eq!(written, required);
        assert_eq!(buf, encode(&msg).unwrap(), "{}", schema.name);
    }
}

#[test]
fn test_small_buffer_reports_required_size() {
    let msg = populated(&IMAGE, 3);
    let required = encoded_len(&msg).unwrap();

    let mut buf = vec![0x5Au8; required - 1];
    let err = encode_sized(&msg, Some(&mut buf[..])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BufferTooSmall);
    assert_eq!(err.required_size(), Some(required));
    assert!(buf.iter().all(|b| *b == 0x5A), "buffer must be untouched");
}

#[test]
fn test_empty_buffer_is_too_small() {
    let msg = populated(&TIME, 1);
    let err = encode_sized(&msg, Some(&mut [0u8; 0][..])).unwrap_err();
    assert_eq!(err.required_size(), Some(12));
}

#[test]
fn test_larger_buffer_keeps_tail() {
    let msg = populated(&TIME, 1);
    let mut buf = [0xEEu8; 20];
    assert_eq!(encode_sized(&msg, Some(&mut buf[..])).unwrap(), 12);
    assert_eq!(&buf[..12], encode(&msg).unwrap().as_slice());
    assert_eq!(&buf[12..], &[0xEE; 8]);
}

#[test]
fn test_big_endian_sized() {
    let codec = CdrCodec::new(EncapsulationKind::CdrBe);
    let msg = populated(&IMAGE, 4);
    let required = codec.encode_sized(&msg, None).unwrap();
    let mut buf = vec![0u8; required];
    codec.encode_sized(&msg, Some(&mut buf[..])).unwrap();
    assert_eq!(buf, codec.encode(&msg).unwrap());
}
