use {
    super::TokenInstructionTag,
    apl_instruction_codec::{
        pack::{coption_pubkey_len, pack_coption_pubkey, pack_u8},
        COption, CodecError, InstructionData, InstructionReader, Pubkey,
    },
    num_derive::FromPrimitive,
    num_traits::FromPrimitive,
};

/// Specifies the authority type for SetAuthority instructions
#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, FromPrimitive, Hash, PartialEq)]
pub enum AuthorityType {
    /// Authority to mint new tokens
    MintTokens = 0,
    /// Authority to freeze any account associated with the Mint
    FreezeAccount = 1,
    /// Owner of a given token account
    AccountOwner = 2,
    /// Authority to close a token account
    CloseAccount = 3,
}

/// Sets a new authority of a mint or account.
///
/// Data layout: `[6, authority_type, new_authority_option, new_authority(32)?]`
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SetAuthority {
    /// The type of authority to update
    pub authority_type: AuthorityType,
    /// The new authority; `None` clears it
    pub new_authority: COption<Pubkey>,
}

impl InstructionData for SetAuthority {
    const TAG: u8 = TokenInstructionTag::SetAuthority as u8;
    const NAME: &'static str = "SetAuthority";

    fn payload_len(&self) -> usize {
        1 + coption_pubkey_len(&self.new_authority)
    }

    fn pack_payload(&self, dst: &mut Vec<u8>) {
        pack_u8(self.authority_type as u8, dst);
        pack_coption_pubkey(&self.new_authority, dst);
    }

    fn unpack_payload(src: &mut InstructionReader<'_>) -> Result<Self, CodecError> {
        let value = src.read_u8("authority_type")?;
        let authority_type =
            AuthorityType::from_u8(value).ok_or(CodecError::InvalidAuthorityType {
                tag: src.tag(),
                value,
            })?;
        Ok(Self {
            authority_type,
            new_authority: src.read_coption_pubkey("new_authority")?,
        })
    }
}
