//! Per-variant codec contract

use crate::{error::CodecError, reader::InstructionReader};

/// One instruction variant's wire shape: a fixed tag byte followed by a
/// payload written and read in a fixed field order.
///
/// Implementors supply the payload half; `pack` and `unpack` add the tag,
/// size the output buffer exactly and validate the tag on the way back in.
pub trait InstructionData: Sized {
    /// Discriminant written as the first byte.
    const TAG: u8;
    /// Human-readable instruction name, used in diagnostics.
    const NAME: &'static str;

    /// Encoded payload size, excluding the tag.
    fn payload_len(&self) -> usize;

    /// Append the payload fields to `dst`.
    fn pack_payload(&self, dst: &mut Vec<u8>);

    /// Read the payload fields from a reader positioned after the tag.
    fn unpack_payload(src: &mut InstructionReader<'_>) -> Result<Self, CodecError>;

    /// Encoded size including the tag.
    fn packed_len(&self) -> usize {
        1 + self.payload_len()
    }

    /// Encode tag and payload into a freshly allocated buffer.
    fn pack(&self) -> Vec<u8> {
        let mut dst = Vec::with_capacity(self.packed_len());
        dst.push(Self::TAG);
        self.pack_payload(&mut dst);
        debug_assert_eq!(dst.len(), self.packed_len());
        dst
    }

    /// Decode a buffer whose first byte must be [`Self::TAG`].
    ///
    /// Bytes after the last field are not inspected.
    fn unpack(input: &[u8]) -> Result<Self, CodecError> {
        let mut src = InstructionReader::for_instruction(input)?;
        src.expect_tag(Self::TAG, Self::NAME)?;
        Self::unpack_payload(&mut src)
    }
}
