//! # Byte-Slice Codec
//!
//! Length-delimited framing: a varint length prefix followed by exactly
//! that many raw bytes. This is wire type 2, the framing behind strings,
//! bytes fields, nested messages and packed repeated fields.
//!
//! ## Security
//! The decode path validates the claimed length against the bytes actually
//! remaining before touching the payload, so a corrupt or hostile length
//! prefix fails cleanly instead of over-reading the buffer. Decoded
//! payloads are borrowed from the input, never copied.

use crate::core::varint::{decode_varint, encode_varint};
use crate::error::{Result, WireError};
use bytes::BufMut;

/// Append a varint length prefix followed by `data` itself to `buf`.
#[inline]
pub fn encode_bytes<B: BufMut>(data: &[u8], buf: &mut B) {
    encode_varint(data.len() as u64, buf);
    buf.put_slice(data);
}

/// Borrow exactly `n` bytes from `buf` starting at `pos`.
///
/// Returns the slice and the position of the first byte after it.
///
/// # Errors
/// [`WireError::Truncated`] if fewer than `n` bytes remain past `pos`.
#[inline]
pub fn read_bytes(buf: &[u8], pos: usize, n: usize) -> Result<(&[u8], usize)> {
    let truncated = || WireError::Truncated {
        offset: pos,
        needed: n,
        available: buf.len().saturating_sub(pos),
    };
    let end = pos.checked_add(n).ok_or_else(truncated)?;
    if end > buf.len() {
        return Err(truncated());
    }
    Ok((&buf[pos..end], end))
}

/// Decode one length-delimited value from `buf` starting at `pos`.
///
/// Returns the payload, borrowed from `buf`, and the position of the first
/// byte after it.
///
/// # Errors
/// Propagates the length varint's errors; returns
/// [`WireError::LengthOverflow`] if the claimed length does not fit a
/// `usize`, and [`WireError::Truncated`] if the buffer holds fewer payload
/// bytes than claimed.
#[inline]
pub fn decode_bytes(buf: &[u8], pos: usize) -> Result<(&[u8], usize)> {
    let (len, at) = decode_varint(buf, pos)?;
    let len = usize::try_from(len).map_err(|_| WireError::LengthOverflow(len))?;
    read_bytes(buf, at, len)
}
