use {
    super::TokenInstructionTag,
    apl_instruction_codec::{
        pack::{coption_pubkey_len, pack_coption_pubkey, pack_pubkey, pack_u8, PUBKEY_LEN},
        COption, CodecError, InstructionData, InstructionReader, Pubkey,
    },
};

/// Initializes a new mint and optionally deposits all the newly minted
/// tokens in an account.
///
/// Data layout: `[0, decimals, mint_authority(32), freeze_option, freeze_authority(32)?]`
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InitializeMint {
    /// Number of base 10 digits to the right of the decimal place
    pub decimals: u8,
    /// The authority/multisignature to mint tokens
    pub mint_authority: Pubkey,
    /// The freeze authority/multisignature of the mint
    pub freeze_authority: COption<Pubkey>,
}

impl InstructionData for InitializeMint {
    const TAG: u8 = TokenInstructionTag::InitializeMint as u8;
    const NAME: &'static str = "InitializeMint";

    fn payload_len(&self) -> usize {
        1 + PUBKEY_LEN + coption_pubkey_len(&self.freeze_authority)
    }

    fn pack_payload(&self, dst: &mut Vec<u8>) {
        pack_u8(self.decimals, dst);
        pack_pubkey(&self.mint_authority, dst);
        pack_coption_pubkey(&self.freeze_authority, dst);
    }

    fn unpack_payload(src: &mut InstructionReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            decimals: src.read_u8("decimals")?,
            mint_authority: src.read_pubkey("mint_authority")?,
            freeze_authority: src.read_coption_pubkey("freeze_authority")?,
        })
    }
}

/// Like [`InitializeMint`], but does not require the rent sysvar account.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InitializeMint2 {
    /// Number of base 10 digits to the right of the decimal place
    pub decimals: u8,
    /// The authority/multisignature to mint tokens
    pub mint_authority: Pubkey,
    /// The freeze authority/multisignature of the mint
    pub freeze_authority: COption<Pubkey>,
}

impl InstructionData for InitializeMint2 {
    const TAG: u8 = TokenInstructionTag::InitializeMint2 as u8;
    const NAME: &'static str = "InitializeMint2";

    fn payload_len(&self) -> usize {
        1 + PUBKEY_LEN + coption_pubkey_len(&self.freeze_authority)
    }

    fn pack_payload(&self, dst: &mut Vec<u8>) {
        pack_u8(self.decimals, dst);
        pack_pubkey(&self.mint_authority, dst);
        pack_coption_pubkey(&self.freeze_authority, dst);
    }

    fn unpack_payload(src: &mut InstructionReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            decimals: src.read_u8("decimals")?,
            mint_authority: src.read_pubkey("mint_authority")?,
            freeze_authority: src.read_coption_pubkey("freeze_authority")?,
        })
    }
}

empty_instruction!(
    /// Initializes a new account to hold tokens. Owner and mint are passed
    /// as accounts.
    InitializeAccount
);

/// Initializes a multisignature account with N provided signers.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct InitializeMultisig {
    /// The number of signers (M) required to validate this multisignature account
    pub m: u8,
}

impl InstructionData for InitializeMultisig {
    const TAG: u8 = TokenInstructionTag::InitializeMultisig as u8;
    const NAME: &'static str = "InitializeMultisig";

    fn payload_len(&self) -> usize {
        1
    }

    fn pack_payload(&self, dst: &mut Vec<u8>) {
        pack_u8(self.m, dst);
    }

    fn unpack_payload(src: &mut InstructionReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            m: src.read_u8("m")?,
        })
    }
}

/// Like [`InitializeAccount`], but the owner pubkey is passed via instruction data.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InitializeAccount2 {
    /// The new account's owner/multisignature
    pub owner: Pubkey,
}

impl InstructionData for InitializeAccount2 {
    const TAG: u8 = TokenInstructionTag::InitializeAccount2 as u8;
    const NAME: &'static str = "InitializeAccount2";

    fn payload_len(&self) -> usize {
        PUBKEY_LEN
    }

    fn pack_payload(&self, dst: &mut Vec<u8>) {
        pack_pubkey(&self.owner, dst);
    }

    fn unpack_payload(src: &mut InstructionReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            owner: src.read_pubkey("owner")?,
        })
    }
}

/// Like [`InitializeAccount2`], but does not require the rent sysvar account.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InitializeAccount3 {
    /// The new account's owner/multisignature
    pub owner: Pubkey,
}

impl InstructionData for InitializeAccount3 {
    const TAG: u8 = TokenInstructionTag::InitializeAccount3 as u8;
    const NAME: &'static str = "InitializeAccount3";

    fn payload_len(&self) -> usize {
        PUBKEY_LEN
    }

    fn pack_payload(&self, dst: &mut Vec<u8>) {
        pack_pubkey(&self.owner, dst);
    }

    fn unpack_payload(src: &mut InstructionReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            owner: src.read_pubkey("owner")?,
        })
    }
}

empty_instruction!(
    /// Initialize the Immutable Owner extension for the given token account.
    InitializeImmutableOwner
);
