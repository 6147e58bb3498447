//! # Error Types
//!
//! Failure reporting for the wire-format codecs.
//!
//! Every fallible operation in this crate fails for one of two reasons, and
//! [`WireError::kind`] tells them apart:
//!
//! - [`ErrorKind::MalformedInput`] — the buffer does not contain enough
//!   bytes to complete the requested decode, or a varint would overflow
//!   64 bits. Always a property of the input data, never of programmer
//!   misuse.
//! - [`ErrorKind::OutOfRange`] — a caller-supplied value is outside its
//!   legal domain before encoding (field number above the protocol limit,
//!   unrecognized wire type, a skip over a deprecated group).
//!
//! Errors are raised synchronously at the point of detection. There is no
//! retry policy and no partial mutation to roll back; callers composing
//! these primitives into a message decoder should treat either kind as
//! fatal to the current decode attempt and propagate it.
//!
//! ## Example Usage
//! ```rust
//! use proto_wire::{decode_varint, ErrorKind};
//!
//! // A lone continuation byte is a truncated varint.
//! let err = decode_varint(&[0x80], 0).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::MalformedInput);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Primary error type for all wire-format operations.
///
/// Variants carry the offending offset or value so callers can report
/// exactly where a decode went wrong without re-scanning the buffer.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WireError {
    #[error("input truncated at offset {offset}: needed {needed} byte(s), {available} remaining")]
    Truncated {
        /// Buffer offset at which the decoder ran out of data.
        offset: usize,
        /// Bytes the operation still required.
        needed: usize,
        /// Bytes actually remaining past `offset`.
        available: usize,
    },

    #[error("varint does not terminate within 10 bytes or overflows 64 bits")]
    VarintOverflow,

    #[error("length prefix {0} exceeds addressable memory")]
    LengthOverflow(u64),

    #[error("wire type {0} is outside the recognized range 0..=5")]
    UnknownWireType(u8),

    #[error("field number {0} exceeds the 29-bit protocol limit")]
    FieldNumberOutOfRange(u64),

    #[error("deprecated group wire type {0} has no skippable payload")]
    DeprecatedGroup(u8),
}

/// Broad classification of a [`WireError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// The input data is truncated or structurally invalid.
    MalformedInput,
    /// A caller-supplied value is outside its legal domain.
    OutOfRange,
}

impl WireError {
    /// Classify this error into one of the two failure kinds.
    pub fn kind(&self) -> ErrorKind {
        match self {
            WireError::Truncated { .. }
            | WireError::VarintOverflow
            | WireError::LengthOverflow(_) => ErrorKind::MalformedInput,
            WireError::UnknownWireType(_)
            | WireError::FieldNumberOutOfRange(_)
            | WireError::DeprecatedGroup(_) => ErrorKind::OutOfRange,
        }
    }

    /// True if the failure was caused by the input data.
    pub fn is_malformed_input(&self) -> bool {
        self.kind() == ErrorKind::MalformedInput
    }

    /// True if the failure was caused by a caller-supplied value.
    pub fn is_out_of_range(&self) -> bool {
        self.kind() == ErrorKind::OutOfRange
    }
}

/// Type alias for Results using WireError
pub type Result<T> = std::result::Result<T, WireError>;
