//! # Zig-Zag Codec
//!
//! Bijective mapping between signed integers and varint-friendly unsigned
//! integers: small-magnitude values of either sign stay small after the
//! transform, so `sint32`/`sint64` fields encode compactly.
//!
//! The transforms are pure integer arithmetic with no failure case; pair
//! them with the varint codec for wire encoding, e.g.
//! `encode_varint(encode_zig_zag64(n), &mut buf)`.

/// Map a signed 32-bit value to its zig-zag unsigned form.
#[inline]
pub const fn encode_zig_zag32(value: i32) -> u32 {
    ((value << 1) ^ (value >> 31)) as u32
}

/// Inverse of [`encode_zig_zag32`], total over the full `u32` range.
#[inline]
pub const fn decode_zig_zag32(value: u32) -> i32 {
    ((value >> 1) as i32) ^ -((value & 1) as i32)
}

/// Map a signed 64-bit value to its zig-zag unsigned form.
#[inline]
pub const fn encode_zig_zag64(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

/// Inverse of [`encode_zig_zag64`], total over the full `u64` range.
#[inline]
pub const fn decode_zig_zag64(value: u64) -> i64 {
    ((value >> 1) as i64) ^ -((value & 1) as i64)
}
