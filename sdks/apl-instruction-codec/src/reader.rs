//! Cursor over instruction data

use {
    crate::{error::CodecError, pack::PUBKEY_LEN},
    solana_program_option::COption,
    solana_pubkey::Pubkey,
};

/// Forward-only cursor that decodes primitives from a byte slice.
///
/// Every read checks the remaining length before touching the buffer and
/// advances the offset by exactly the bytes it consumed, so callers composing
/// several variable-length fields can read `offset()` between reads.
#[derive(Clone, Debug)]
pub struct InstructionReader<'a> {
    input: &'a [u8],
    offset: usize,
    tag: Option<u8>,
}

impl<'a> InstructionReader<'a> {
    /// Reader over a bare payload, starting at `offset`.
    pub fn new(input: &'a [u8], offset: usize) -> Self {
        Self {
            input,
            offset,
            tag: None,
        }
    }

    /// Reader over an instruction buffer, positioned after the tag byte.
    pub fn for_instruction(input: &'a [u8]) -> Result<Self, CodecError> {
        let (&tag, _) = input.split_first().ok_or(CodecError::EmptyBuffer)?;
        Ok(Self {
            input,
            offset: 1,
            tag: Some(tag),
        })
    }

    /// Tag byte of the instruction buffer, if this reader was built over one.
    pub fn tag(&self) -> Option<u8> {
        self.tag
    }

    /// Fails with [`CodecError::WrongTag`] unless the buffer's tag is `expected`.
    pub fn expect_tag(&self, expected: u8, name: &'static str) -> Result<(), CodecError> {
        match self.tag {
            Some(found) if found != expected => Err(CodecError::WrongTag {
                name,
                expected,
                found,
            }),
            _ => Ok(()),
        }
    }

    /// Bytes consumed so far, including the tag.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.input.len().saturating_sub(self.offset)
    }

    fn take(&mut self, len: usize, field: &'static str) -> Result<&'a [u8], CodecError> {
        let remaining = self.remaining();
        if remaining < len {
            return Err(CodecError::TruncatedBuffer {
                tag: self.tag,
                field,
                needed: len,
                remaining,
            });
        }
        let bytes = &self.input[self.offset..self.offset + len];
        self.offset += len;
        Ok(bytes)
    }

    fn take_array<const N: usize>(&mut self, field: &'static str) -> Result<[u8; N], CodecError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N, field)?);
        Ok(out)
    }

    /// Read a `u8`.
    pub fn read_u8(&mut self, field: &'static str) -> Result<u8, CodecError> {
        Ok(self.take_array::<1>(field)?[0])
    }

    /// Read a little-endian `u32`.
    pub fn read_u32(&mut self, field: &'static str) -> Result<u32, CodecError> {
        self.take_array(field).map(u32::from_le_bytes)
    }

    /// Read a little-endian `u64`.
    pub fn read_u64(&mut self, field: &'static str) -> Result<u64, CodecError> {
        self.take_array(field).map(u64::from_le_bytes)
    }

    /// Read a bool; any nonzero byte decodes as `true`.
    pub fn read_bool(&mut self, field: &'static str) -> Result<bool, CodecError> {
        Ok(self.read_u8(field)? != 0)
    }

    /// Read a raw 32-byte key.
    pub fn read_pubkey(&mut self, field: &'static str) -> Result<Pubkey, CodecError> {
        self.take_array::<PUBKEY_LEN>(field)
            .map(Pubkey::new_from_array)
    }

    /// Read a presence byte followed, when it is 1, by a 32-byte key.
    pub fn read_coption_pubkey(
        &mut self,
        field: &'static str,
    ) -> Result<COption<Pubkey>, CodecError> {
        match self.read_u8(field)? {
            0 => Ok(COption::None),
            1 => self.read_pubkey(field).map(COption::Some),
            value => Err(CodecError::InvalidOptionDiscriminant {
                tag: self.tag,
                value,
            }),
        }
    }

    /// Read a `u32` byte length followed by that many UTF-8 bytes.
    pub fn read_string(&mut self, field: &'static str) -> Result<String, CodecError> {
        let len = self.read_u32(field)? as usize;
        let bytes = self.take(len, field)?;
        self.utf8(bytes)
    }

    /// Read a presence byte followed, when it is 1, by a length-prefixed string.
    pub fn read_option_string(
        &mut self,
        field: &'static str,
    ) -> Result<Option<String>, CodecError> {
        match self.read_u8(field)? {
            0 => Ok(None),
            1 => self.read_string(field).map(Some),
            value => Err(CodecError::InvalidOptionDiscriminant {
                tag: self.tag,
                value,
            }),
        }
    }

    /// Read a `u32` count followed by that many length-prefixed string pairs.
    pub fn read_string_pairs(
        &mut self,
        field: &'static str,
    ) -> Result<Vec<(String, String)>, CodecError> {
        let count = self.read_u32(field)? as usize;
        // each pair carries at least two 4-byte length prefixes
        let mut pairs = Vec::with_capacity(count.min(self.remaining() / 8));
        for _ in 0..count {
            let key = self.read_string(field)?;
            let value = self.read_string(field)?;
            pairs.push((key, value));
        }
        Ok(pairs)
    }

    /// Consume everything left in the buffer as UTF-8, without a length prefix.
    pub fn read_remaining_utf8(&mut self) -> Result<String, CodecError> {
        let bytes = &self.input[self.offset.min(self.input.len())..];
        self.offset = self.input.len();
        self.utf8(bytes)
    }

    fn utf8(&self, bytes: &[u8]) -> Result<String, CodecError> {
        String::from_utf8(bytes.to_vec()).map_err(|_| CodecError::InvalidUtf8 { tag: self.tag })
    }
}
