//! Error types

use thiserror::Error;

/// Errors that may be returned while packing or unpacking instruction data.
///
/// Every failure is a deterministic validation failure of caller input;
/// none of them is worth retrying.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum CodecError {
    // 0
    /// Zero-length input to a decode entry point
    #[error("Empty instruction buffer")]
    EmptyBuffer,
    /// Leading byte is not a discriminant known to the program's registry
    #[error("Unknown instruction tag: {0}")]
    UnknownInstructionTag(u8),
    /// Leading byte does not match the discriminant of the decoded variant
    #[error("Invalid tag for {name}: expected {expected}, found {found}")]
    WrongTag {
        /// Instruction being decoded
        name: &'static str,
        /// Discriminant of that instruction
        expected: u8,
        /// Discriminant found in the buffer
        found: u8,
    },
    /// Fewer bytes remain than a field requires
    #[error("Buffer too short for {field}: needed {needed} bytes, {remaining} remaining")]
    TruncatedBuffer {
        /// Instruction tag, when decoding an instruction buffer
        tag: Option<u8>,
        /// Field being read
        field: &'static str,
        /// Bytes the field requires
        needed: usize,
        /// Bytes left in the buffer
        remaining: usize,
    },
    /// Presence byte of an optional value is neither 0 nor 1
    #[error("Invalid option discriminant: {value}")]
    InvalidOptionDiscriminant {
        /// Instruction tag, when decoding an instruction buffer
        tag: Option<u8>,
        /// Offending presence byte
        value: u8,
    },
    // 5
    /// A supplied key is not exactly 32 bytes
    #[error("Invalid key length: expected 32 bytes, got {0}")]
    InvalidKeyLength(usize),
    /// String payload is not valid UTF-8
    #[error("Invalid UTF-8 in string field")]
    InvalidUtf8 {
        /// Instruction tag, when decoding an instruction buffer
        tag: Option<u8>,
    },
    /// Authority type byte outside the known range
    #[error("Invalid authority type: {value}")]
    InvalidAuthorityType {
        /// Instruction tag, when decoding an instruction buffer
        tag: Option<u8>,
        /// Offending authority byte
        value: u8,
    },
}

impl CodecError {
    /// The instruction tag the failure was observed under, when known.
    pub fn tag(&self) -> Option<u8> {
        match self {
            CodecError::EmptyBuffer | CodecError::InvalidKeyLength(_) => None,
            CodecError::UnknownInstructionTag(tag) => Some(*tag),
            CodecError::WrongTag { found, .. } => Some(*found),
            CodecError::TruncatedBuffer { tag, .. }
            | CodecError::InvalidOptionDiscriminant { tag, .. }
            | CodecError::InvalidUtf8 { tag }
            | CodecError::InvalidAuthorityType { tag, .. } => *tag,
        }
    }
}
