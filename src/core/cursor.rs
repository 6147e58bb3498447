//! # Wire Cursor
//!
//! The buffer-plus-position pair every codec in this crate reads from,
//! packaged as a stateful reader mutated in place. Each method delegates
//! to the free-function codecs and advances the cursor only on success, so
//! a failed read leaves the position where it was and the caller can
//! report or recover precisely.

use crate::core::fixed::{skip_field, skip_fixed32, skip_fixed64};
use crate::core::header::{decode_header, WireType};
use crate::core::slice::{decode_bytes, read_bytes};
use crate::core::varint::decode_varint;
use crate::error::Result;

/// Borrowed decode cursor over a wire-format buffer.
///
/// ```rust
/// use proto_wire::{encode_header, encode_varint, WireCursor, WireType};
///
/// let mut buf = Vec::new();
/// encode_header(1, WireType::Varint, &mut buf).unwrap();
/// encode_varint(150, &mut buf);
///
/// let mut cursor = WireCursor::new(&buf);
/// let (number, wire_type) = cursor.read_header().unwrap();
/// assert_eq!((number, wire_type), (1, WireType::Varint));
/// assert_eq!(cursor.read_varint().unwrap(), 150);
/// assert!(cursor.is_at_end());
/// ```
#[derive(Debug, Clone)]
pub struct WireCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireCursor<'a> {
    /// Wrap `buf` with the position at its start.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current offset into the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes remaining past the current position.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// True once the cursor has consumed the whole buffer.
    pub fn is_at_end(&self) -> bool {
        self.pos == self.buf.len()
    }

    /// Decode one varint and advance past it.
    pub fn read_varint(&mut self) -> Result<u64> {
        let (value, at) = decode_varint(self.buf, self.pos)?;
        self.pos = at;
        Ok(value)
    }

    /// Decode one field tag and advance past it.
    pub fn read_header(&mut self) -> Result<(u64, WireType)> {
        let (number, wire_type, at) = decode_header(self.buf, self.pos)?;
        self.pos = at;
        Ok((number, wire_type))
    }

    /// Decode one length-delimited payload, borrowed from the underlying
    /// buffer, and advance past it.
    pub fn read_length_delimited(&mut self) -> Result<&'a [u8]> {
        let (data, at) = decode_bytes(self.buf, self.pos)?;
        self.pos = at;
        Ok(data)
    }

    /// Borrow exactly `n` raw bytes and advance past them.
    pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
        let (data, at) = read_bytes(self.buf, self.pos, n)?;
        self.pos = at;
        Ok(data)
    }

    /// Advance past a 4-byte fixed32 payload.
    pub fn skip_fixed32(&mut self) -> Result<()> {
        self.pos = skip_fixed32(self.buf, self.pos)?;
        Ok(())
    }

    /// Advance past an 8-byte fixed64 payload.
    pub fn skip_fixed64(&mut self) -> Result<()> {
        self.pos = skip_fixed64(self.buf, self.pos)?;
        Ok(())
    }

    /// Advance past one field payload of the given wire type.
    pub fn skip(&mut self, wire_type: WireType) -> Result<()> {
        self.pos = skip_field(self.buf, self.pos, wire_type)?;
        Ok(())
    }
}
