//! # Header Codec
//!
//! Encoding and decoding of the field tag that prefixes every encoded
//! field: `(field_number << 3) | wire_type`, packed as a single varint.
//!
//! ## Wire Types
//! The low three bits of a tag identify how the field's payload is framed.
//! Recognized values are 0 (varint), 1 (64-bit fixed), 2 (length-delimited)
//! and 5 (32-bit fixed); the deprecated group markers 3 and 4 round-trip
//! through this codec but have no further processing in this crate. Raw
//! values 6 and 7 are rejected.
//!
//! Field numbers occupy the 29 bits left after the tag bits, so
//! [`encode_header`] rejects numbers above [`MAX_FIELD_NUMBER`].

use crate::core::varint::{decode_varint, encode_varint};
use crate::error::{Result, WireError};
use bytes::BufMut;
use serde::{Deserialize, Serialize};

/// Largest encodable field number (2^29 − 1).
pub const MAX_FIELD_NUMBER: u64 = (1 << 29) - 1;

/// Payload framing identifier carried in the low three bits of a field tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum WireType {
    /// LEB128 varint payload.
    Varint = 0,
    /// Raw little-endian 8-byte payload.
    Fixed64 = 1,
    /// Varint length prefix followed by that many raw bytes.
    LengthDelimited = 2,
    /// Deprecated group start marker; round-trips, no payload defined here.
    StartGroup = 3,
    /// Deprecated group end marker; round-trips, no payload defined here.
    EndGroup = 4,
    /// Raw little-endian 4-byte payload.
    Fixed32 = 5,
}

impl WireType {
    /// Recover a wire type from its 3-bit tag value.
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(WireType::Varint),
            1 => Some(WireType::Fixed64),
            2 => Some(WireType::LengthDelimited),
            3 => Some(WireType::StartGroup),
            4 => Some(WireType::EndGroup),
            5 => Some(WireType::Fixed32),
            _ => None,
        }
    }

    /// The 3-bit tag value for this wire type.
    pub fn as_raw(self) -> u8 {
        self as u8
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            WireType::Varint => "varint",
            WireType::Fixed64 => "fixed64",
            WireType::LengthDelimited => "length-delimited",
            WireType::StartGroup => "group-start",
            WireType::EndGroup => "group-end",
            WireType::Fixed32 => "fixed32",
        }
    }
}

/// Append the tag for `(field_number, wire_type)` to `buf`.
///
/// # Errors
/// [`WireError::FieldNumberOutOfRange`] if `field_number` exceeds
/// [`MAX_FIELD_NUMBER`].
#[inline]
pub fn encode_header<B: BufMut>(field_number: u64, wire_type: WireType, buf: &mut B) -> Result<()> {
    if field_number > MAX_FIELD_NUMBER {
        return Err(WireError::FieldNumberOutOfRange(field_number));
    }
    encode_varint((field_number << 3) | u64::from(wire_type.as_raw()), buf);
    Ok(())
}

/// Decode one field tag from `buf` starting at `pos`.
///
/// Returns the field number, the wire type, and the position of the first
/// byte after the tag. The field number is not range-checked on decode, so
/// tags produced by laxer encoders still parse.
///
/// # Errors
/// Propagates the varint decoder's [`WireError::Truncated`] and
/// [`WireError::VarintOverflow`]; returns [`WireError::UnknownWireType`]
/// carrying the recovered value for wire bits 6 and 7.
#[inline]
pub fn decode_header(buf: &[u8], pos: usize) -> Result<(u64, WireType, usize)> {
    let (key, at) = decode_varint(buf, pos)?;
    let wire = (key & 0x7) as u8;
    let wire_type = WireType::from_raw(wire).ok_or(WireError::UnknownWireType(wire))?;
    Ok((key >> 3, wire_type, at))
}
