//! # Core Wire-Format Codecs
//!
//! Low-level binary primitives of the Protocol Buffers wire format.
//!
//! Every field of every encoded message ultimately passes through these
//! five codecs, so they are the hot path: straight-line integer
//! arithmetic, no allocation on decode, no state between calls.
//!
//! ## Components
//! - **varint**: LEB128 unsigned integers, 1–10 bytes
//! - **zigzag**: signed↔unsigned transforms for `sint32`/`sint64`
//! - **header**: the `(field_number << 3) | wire_type` tag varint
//! - **slice**: length-delimited byte-string framing
//! - **fixed**: skipping over fixed 4/8-byte payloads
//! - **cursor**: the buffer+position pair as an in-place reader
//!
//! ## Wire Format
//! ```text
//! [Tag varint] [Payload: varint | fixed64(8) | len varint + bytes | fixed32(4)]
//! ```
//!
//! ## Security
//! - Varint decode is bounded at 10 bytes; 64-bit overflow is rejected
//! - Length prefixes are validated against the remaining bytes before any
//!   payload access
//! - Decoding never allocates or copies; payloads are borrowed slices

pub mod cursor;
pub mod fixed;
pub mod header;
pub mod slice;
pub mod varint;
pub mod zigzag;
