use {
    super::TokenInstructionTag,
    apl_instruction_codec::{CodecError, InstructionData, InstructionReader},
};

amount_instruction!(
    /// Transfers tokens from one account to another either directly or via a
    /// delegate.
    Transfer
);

amount_instruction!(
    /// Approves a delegate. A delegate is given the authority over tokens on
    /// behalf of the source account's owner.
    Approve
);

amount_instruction!(
    /// Mints new tokens to an account.
    MintTo
);

amount_instruction!(
    /// Burns tokens by removing them from an account.
    Burn
);

checked_amount_instruction!(
    /// Transfers tokens, asserting the token mint and decimals.
    TransferChecked
);

checked_amount_instruction!(
    /// Approves a delegate, asserting the token mint and decimals.
    ApproveChecked
);

checked_amount_instruction!(
    /// Mints new tokens to an account, asserting the decimals.
    MintToChecked
);

checked_amount_instruction!(
    /// Burns tokens, asserting the decimals.
    BurnChecked
);

amount_instruction!(
    /// Convert an Amount of tokens to a UiAmount `string`, using the given
    /// mint.
    AmountToUiAmount
);

/// Convert a UiAmount of tokens to a little-endian `u64` raw Amount, using the
/// given mint.
///
/// The string occupies the rest of the buffer after the tag and carries no
/// length prefix, unlike every other string on the wire.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UiAmountToAmount {
    /// The ui_amount of tokens to reformat
    pub ui_amount: String,
}

impl InstructionData for UiAmountToAmount {
    const TAG: u8 = TokenInstructionTag::UiAmountToAmount as u8;
    const NAME: &'static str = "UiAmountToAmount";

    fn payload_len(&self) -> usize {
        self.ui_amount.len()
    }

    fn pack_payload(&self, dst: &mut Vec<u8>) {
        dst.extend_from_slice(self.ui_amount.as_bytes());
    }

    fn unpack_payload(src: &mut InstructionReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            ui_amount: src.read_remaining_utf8()?,
        })
    }
}
