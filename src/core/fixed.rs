//! # Fixed-Width Skipping
//!
//! Cursor advancement past fixed 32-bit and 64-bit payloads (wire types 5
//! and 1) without interpreting their content, plus a dispatch helper that
//! walks past one field payload of any recognized wire type. Both exist so
//! a schema-tolerant decoder can step over fields it does not know.

use crate::core::header::WireType;
use crate::core::slice::decode_bytes;
use crate::core::varint::decode_varint;
use crate::error::{Result, WireError};

#[inline]
fn advance(buf: &[u8], pos: usize, width: usize) -> Result<usize> {
    let end = pos.saturating_add(width);
    if end > buf.len() {
        return Err(WireError::Truncated {
            offset: pos,
            needed: width,
            available: buf.len().saturating_sub(pos),
        });
    }
    Ok(end)
}

/// Advance past a 4-byte fixed32 payload, returning the new position.
///
/// # Errors
/// [`WireError::Truncated`] if fewer than 4 bytes remain.
#[inline]
pub fn skip_fixed32(buf: &[u8], pos: usize) -> Result<usize> {
    advance(buf, pos, 4)
}

/// Advance past an 8-byte fixed64 payload, returning the new position.
///
/// # Errors
/// [`WireError::Truncated`] if fewer than 8 bytes remain.
#[inline]
pub fn skip_fixed64(buf: &[u8], pos: usize) -> Result<usize> {
    advance(buf, pos, 8)
}

/// Advance past one field payload of the given wire type, returning the
/// new position. The tag itself must already have been consumed.
///
/// # Errors
/// Propagates the underlying codec's malformed-input errors, and returns
/// [`WireError::DeprecatedGroup`] for the group markers, which round-trip
/// through the header codec but define no payload to skip.
pub fn skip_field(buf: &[u8], pos: usize, wire_type: WireType) -> Result<usize> {
    match wire_type {
        WireType::Varint => decode_varint(buf, pos).map(|(_, at)| at),
        WireType::Fixed64 => skip_fixed64(buf, pos),
        WireType::LengthDelimited => decode_bytes(buf, pos).map(|(_, at)| at),
        WireType::Fixed32 => skip_fixed32(buf, pos),
        WireType::StartGroup | WireType::EndGroup => {
            Err(WireError::DeprecatedGroup(wire_type.as_raw()))
        }
    }
}
