#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Edge-case tests for the wire-format codecs.
//! Covers truncation, overflow, bounds off-by-ones and error classification.

use proto_wire::{
    decode_bytes, decode_header, decode_varint, encode_bytes, encode_header, encode_varint,
    read_bytes, skip_field, skip_fixed32, skip_fixed64, ErrorKind, WireCursor, WireError,
    WireType, MAX_FIELD_NUMBER, MAX_VARINT_LEN,
};

// ============================================================================
// VARINT EDGE CASES
// ============================================================================

#[test]
fn test_varint_empty_buffer() {
    let err = decode_varint(&[], 0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedInput);
}

#[test]
fn test_varint_lone_continuation_byte() {
    let err = decode_varint(&[0x80], 0).unwrap_err();
    assert!(matches!(err, WireError::Truncated { offset: 1, .. }));
}

#[test]
fn test_varint_truncated_mid_value() {
    // Nine continuation bytes and no terminator.
    let err = decode_varint(&[0xFF; 9], 0).unwrap_err();
    assert!(matches!(err, WireError::Truncated { offset: 9, .. }));
}

#[test]
fn test_varint_exactly_ten_bytes_decodes() {
    let mut buf = vec![0xFF; 9];
    buf.push(0x01);
    let (value, pos) = decode_varint(&buf, 0).expect("ten-byte maximum");
    assert_eq!(value, u64::MAX);
    assert_eq!(pos, MAX_VARINT_LEN);
}

#[test]
fn test_varint_eleventh_byte_rejected() {
    let err = decode_varint(&[0x80; 11], 0).unwrap_err();
    assert_eq!(err, WireError::VarintOverflow);
}

#[test]
fn test_varint_tenth_byte_payload_overflow_rejected() {
    for tenth in [0x02u8, 0x04, 0x7F] {
        let mut buf = vec![0xFF; 9];
        buf.push(tenth);
        let err = decode_varint(&buf, 0).unwrap_err();
        assert_eq!(err, WireError::VarintOverflow, "tenth byte {tenth:#04x}");
    }
}

#[test]
fn test_varint_position_at_buffer_end() {
    let buf = [0x01];
    let err = decode_varint(&buf, 1).unwrap_err();
    assert!(matches!(err, WireError::Truncated { offset: 1, .. }));
}

// ============================================================================
// HEADER EDGE CASES
// ============================================================================

#[test]
fn test_header_field_number_boundary() {
    let mut buf = Vec::new();
    encode_header(MAX_FIELD_NUMBER, WireType::Fixed64, &mut buf).expect("at the limit");
    let (number, wire_type, _) = decode_header(&buf, 0).expect("decode");
    assert_eq!((number, wire_type), (MAX_FIELD_NUMBER, WireType::Fixed64));

    let mut buf = Vec::new();
    let err = encode_header(MAX_FIELD_NUMBER + 1, WireType::Fixed64, &mut buf).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfRange);
    assert!(buf.is_empty(), "nothing written on rejection");
}

#[test]
fn test_header_decode_accepts_numbers_beyond_the_encode_cap() {
    // A laxer encoder can produce tags above the 29-bit cap; decode splits
    // them without a range check.
    let mut buf = Vec::new();
    encode_varint(u64::from(u32::MAX) << 3, &mut buf);
    let (number, wire_type, _) = decode_header(&buf, 0).expect("splits");
    assert_eq!(number, u64::from(u32::MAX));
    assert_eq!(wire_type, WireType::Varint);
}

#[test]
fn test_header_deprecated_groups_roundtrip() {
    for wire_type in [WireType::StartGroup, WireType::EndGroup] {
        let mut buf = Vec::new();
        encode_header(9, wire_type, &mut buf).expect("groups encode");
        let (number, decoded, _) = decode_header(&buf, 0).expect("groups decode");
        assert_eq!((number, decoded), (9, wire_type));
    }
}

#[test]
fn test_header_unknown_wire_bits_carry_the_value() {
    match decode_header(&[0x0E], 0) {
        Err(WireError::UnknownWireType(6)) => {}
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_header_truncated_tag() {
    let err = decode_header(&[0xF8], 0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedInput);
}

// ============================================================================
// LENGTH-DELIMITED EDGE CASES
// ============================================================================

#[test]
fn test_bytes_payload_boundary_triple() {
    let mut buf = Vec::new();
    encode_bytes(&[0xAB; 256], &mut buf);

    // Exact buffer decodes.
    let (payload, pos) = decode_bytes(&buf, 0).expect("exact");
    assert_eq!(payload.len(), 256);
    assert_eq!(pos, buf.len());

    // One byte short fails.
    let err = decode_bytes(&buf[..buf.len() - 1], 0).unwrap_err();
    assert!(matches!(err, WireError::Truncated { .. }));

    // One trailing byte extra decodes and leaves the position before it.
    buf.push(0xEE);
    let (payload, pos) = decode_bytes(&buf, 0).expect("extra tail");
    assert_eq!(payload.len(), 256);
    assert_eq!(pos, buf.len() - 1);
}

#[test]
fn test_bytes_length_prefix_only() {
    let err = decode_bytes(&[0x05], 0).unwrap_err();
    assert_eq!(
        err,
        WireError::Truncated {
            offset: 1,
            needed: 5,
            available: 0,
        }
    );
}

#[test]
fn test_bytes_huge_claimed_length() {
    let mut buf = Vec::new();
    encode_varint(u64::MAX, &mut buf);
    buf.extend_from_slice(&[0u8; 32]);
    let err = decode_bytes(&buf, 0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedInput);
}

#[test]
fn test_bytes_truncated_length_varint() {
    let err = decode_bytes(&[0x80], 0).unwrap_err();
    assert!(matches!(err, WireError::Truncated { .. }));
}

#[test]
fn test_read_bytes_zero_length_everywhere() {
    let buf = b"abc";
    for pos in 0..=3 {
        let (data, new_pos) = read_bytes(buf, pos, 0).expect("zero-length read");
        assert!(data.is_empty());
        assert_eq!(new_pos, pos);
    }
}

#[test]
fn test_read_bytes_whole_buffer() {
    let (data, pos) = read_bytes(b"abc", 0, 3).expect("whole buffer");
    assert_eq!(data, b"abc");
    assert_eq!(pos, 3);

    let err = read_bytes(b"abc", 0, 4).unwrap_err();
    assert_eq!(
        err,
        WireError::Truncated {
            offset: 0,
            needed: 4,
            available: 3,
        }
    );
}

// ============================================================================
// FIXED SKIP EDGE CASES
// ============================================================================

#[test]
fn test_fixed_skip_boundary_triple() {
    assert_eq!(skip_fixed32(&[0u8; 4], 0).expect("exact"), 4);
    assert!(skip_fixed32(&[0u8; 3], 0).is_err());
    assert_eq!(skip_fixed32(&[0u8; 5], 0).expect("extra"), 4);

    assert_eq!(skip_fixed64(&[0u8; 8], 0).expect("exact"), 8);
    assert!(skip_fixed64(&[0u8; 7], 0).is_err());
    assert_eq!(skip_fixed64(&[0u8; 9], 0).expect("extra"), 8);
}

#[test]
fn test_fixed_skip_at_offset() {
    let err = skip_fixed64(&[0u8; 12], 5).unwrap_err();
    assert_eq!(
        err,
        WireError::Truncated {
            offset: 5,
            needed: 8,
            available: 7,
        }
    );
}

#[test]
fn test_skip_field_truncated_payloads() {
    assert!(skip_field(&[0x80], 0, WireType::Varint).is_err());
    assert!(skip_field(&[0x05, 0x00], 0, WireType::LengthDelimited).is_err());
    assert!(skip_field(&[0u8; 3], 0, WireType::Fixed32).is_err());
    assert!(skip_field(&[0u8; 7], 0, WireType::Fixed64).is_err());
}

#[test]
fn test_skip_field_groups_classified_out_of_range() {
    let err = skip_field(&[0u8; 16], 0, WireType::StartGroup).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfRange);
}

// ============================================================================
// CURSOR EDGE CASES
// ============================================================================

#[test]
fn test_cursor_empty_buffer() {
    let mut cursor = WireCursor::new(&[]);
    assert!(cursor.is_at_end());
    assert_eq!(cursor.remaining(), 0);
    assert!(cursor.read_varint().is_err());
    assert!(cursor.read_header().is_err());
    assert_eq!(cursor.position(), 0);
}

#[test]
fn test_cursor_schema_tolerant_walk() {
    // A record containing a field the reader does not understand: it can
    // still walk to the end by skipping on wire type alone.
    let mut buf = Vec::new();
    encode_header(1, WireType::Varint, &mut buf).expect("tag 1");
    encode_varint(7, &mut buf);
    encode_header(99, WireType::Fixed64, &mut buf).expect("unknown tag");
    buf.extend_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x00, 0x00, 0x00]);
    encode_header(2, WireType::LengthDelimited, &mut buf).expect("tag 2");
    encode_bytes(b"kept", &mut buf);

    let mut cursor = WireCursor::new(&buf);
    let mut kept = Vec::new();
    while !cursor.is_at_end() {
        let (number, wire_type) = cursor.read_header().expect("tag");
        match number {
            1 => kept.push(cursor.read_varint().expect("varint").to_string()),
            2 => kept.push(
                String::from_utf8(cursor.read_length_delimited().expect("bytes").to_vec())
                    .expect("utf8"),
            ),
            _ => cursor.skip(wire_type).expect("skip unknown"),
        }
    }
    assert_eq!(kept, ["7", "kept"]);
}

// ============================================================================
// ERROR FORMATTING
// ============================================================================

#[test]
fn test_error_display_formatting() {
    let errors = vec![
        WireError::Truncated {
            offset: 3,
            needed: 4,
            available: 1,
        },
        WireError::VarintOverflow,
        WireError::LengthOverflow(u64::MAX),
        WireError::UnknownWireType(6),
        WireError::FieldNumberOutOfRange(1 << 30),
        WireError::DeprecatedGroup(4),
    ];

    for err in errors {
        let display_str = format!("{err}");
        assert!(!display_str.is_empty(), "error should have display format");
        let debug_str = format!("{err:?}");
        assert!(!debug_str.is_empty(), "error should have debug format");
    }
}
