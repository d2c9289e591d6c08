//! Instruction types

use {
    apl_instruction_codec::CodecError,
    num_derive::FromPrimitive,
    num_traits::FromPrimitive,
    tracing::{debug, trace},
};

/// Instructions supported by the associated token account program.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, FromPrimitive, Hash, PartialEq)]
pub enum AssociatedTokenAccountInstruction {
    /// Creates an associated token account for the given wallet address and
    /// token mint. Fails if the account already exists.
    Create = 0,
    /// Creates an associated token account unless one already exists.
    CreateIdempotent = 1,
}

impl AssociatedTokenAccountInstruction {
    /// Unpack a byte array into an AssociatedTokenAccountInstruction
    ///
    /// Only the tag byte is read.
    pub fn unpack(input: &[u8]) -> Result<Self, CodecError> {
        let Some(&tag) = input.first() else {
            debug!("rejecting empty associated token account instruction buffer");
            return Err(CodecError::EmptyBuffer);
        };
        let Some(instruction) = Self::from_u8(tag) else {
            debug!(tag, "rejecting unknown associated token account instruction tag");
            return Err(CodecError::UnknownInstructionTag(tag));
        };
        trace!("Instruction: {:?}", instruction);
        Ok(instruction)
    }

    /// Pack the instruction into its one-byte data buffer
    pub fn pack(&self) -> Vec<u8> {
        vec![*self as u8]
    }
}
