//! # proto-wire
//!
//! Fast, zero-copy Protocol Buffers wire-format primitives.
//!
//! This crate is the byte-level substrate beneath a message
//! (de)serialization library: unsigned LEB128 varints, zig-zag transforms
//! for signed integers, field-tag packing, length-delimited framing and
//! fixed-width skipping. It carries no message object model, no `.proto`
//! schema handling and no reflection — just a flat byte buffer, a cursor,
//! and bit-exact codecs.
//!
//! ## Features
//! - **Bounded decoding**: varints are capped at 10 bytes and 64-bit
//!   overflow is rejected, never truncated
//! - **Zero-copy**: decoded payloads are slices borrowed from the input
//! - **Stateless**: every operation is a pure function of its inputs, so
//!   concurrent use on shared read-only buffers needs no locking
//! - **Two-kind errors**: malformed input data and out-of-range caller
//!   values are distinguished by [`WireError::kind`]
//!
//! ## Example Usage
//! ```rust
//! use proto_wire::{
//!     decode_bytes, decode_header, encode_bytes, encode_header, encode_varint,
//!     encode_zig_zag64, WireType,
//! };
//!
//! // Encode: field 1 is a sint64, field 2 is a byte string.
//! let mut buf = Vec::new();
//! encode_header(1, WireType::Varint, &mut buf).unwrap();
//! encode_varint(encode_zig_zag64(-42), &mut buf);
//! encode_header(2, WireType::LengthDelimited, &mut buf).unwrap();
//! encode_bytes(b"wire", &mut buf);
//!
//! // Decode walks the same bytes with a (buffer, position) cursor.
//! let (number, wire_type, pos) = decode_header(&buf, 0).unwrap();
//! assert_eq!((number, wire_type), (1, WireType::Varint));
//! let (zz, pos) = proto_wire::decode_varint(&buf, pos).unwrap();
//! assert_eq!(proto_wire::decode_zig_zag64(zz), -42);
//! let (_, _, pos) = decode_header(&buf, pos).unwrap();
//! let (payload, pos) = decode_bytes(&buf, pos).unwrap();
//! assert_eq!(payload, b"wire");
//! assert_eq!(pos, buf.len());
//! ```

pub mod core;
pub mod error;

pub use crate::core::cursor::WireCursor;
pub use crate::core::fixed::{skip_field, skip_fixed32, skip_fixed64};
pub use crate::core::header::{decode_header, encode_header, WireType, MAX_FIELD_NUMBER};
pub use crate::core::slice::{decode_bytes, encode_bytes, read_bytes};
pub use crate::core::varint::{decode_varint, encode_varint, encoded_varint_len, MAX_VARINT_LEN};
pub use crate::core::zigzag::{
    decode_zig_zag32, decode_zig_zag64, encode_zig_zag32, encode_zig_zag64,
};
pub use crate::error::{ErrorKind, Result, WireError};
