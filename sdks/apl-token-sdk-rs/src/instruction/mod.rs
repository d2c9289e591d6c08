//! Instruction types
//!
//! One struct per APL Token instruction, each implementing
//! [`InstructionData`], plus the [`TokenInstruction`] union that dispatches
//! on the leading tag byte.

use {
    apl_instruction_codec::{CodecError, InstructionData},
    num_derive::FromPrimitive,
    num_traits::FromPrimitive,
    tracing::{debug, trace},
};

/// Tag-only instruction: encodes to exactly the one tag byte.
macro_rules! empty_instruction {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
        pub struct $name;

        impl ::apl_instruction_codec::InstructionData for $name {
            const TAG: u8 = $crate::instruction::TokenInstructionTag::$name as u8;
            const NAME: &'static str = stringify!($name);

            fn payload_len(&self) -> usize {
                0
            }

            fn pack_payload(&self, _dst: &mut Vec<u8>) {}

            fn unpack_payload(
                _src: &mut ::apl_instruction_codec::InstructionReader<'_>,
            ) -> Result<Self, ::apl_instruction_codec::CodecError> {
                Ok(Self)
            }
        }
    };
}

/// `{ amount: u64 }` instruction: 9 bytes on the wire.
macro_rules! amount_instruction {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
        pub struct $name {
            /// Amount in base units
            pub amount: u64,
        }

        impl ::apl_instruction_codec::InstructionData for $name {
            const TAG: u8 = $crate::instruction::TokenInstructionTag::$name as u8;
            const NAME: &'static str = stringify!($name);

            fn payload_len(&self) -> usize {
                8
            }

            fn pack_payload(&self, dst: &mut Vec<u8>) {
                ::apl_instruction_codec::pack::pack_u64(self.amount, dst);
            }

            fn unpack_payload(
                src: &mut ::apl_instruction_codec::InstructionReader<'_>,
            ) -> Result<Self, ::apl_instruction_codec::CodecError> {
                Ok(Self {
                    amount: src.read_u64("amount")?,
                })
            }
        }
    };
}

/// `{ amount: u64, decimals: u8 }` instruction: 10 bytes on the wire.
macro_rules! checked_amount_instruction {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
        pub struct $name {
            /// Amount in base units
            pub amount: u64,
            /// Expected number of base 10 digits to the right of the decimal place
            pub decimals: u8,
        }

        impl ::apl_instruction_codec::InstructionData for $name {
            const TAG: u8 = $crate::instruction::TokenInstructionTag::$name as u8;
            const NAME: &'static str = stringify!($name);

            fn payload_len(&self) -> usize {
                8 + 1
            }

            fn pack_payload(&self, dst: &mut Vec<u8>) {
                ::apl_instruction_codec::pack::pack_u64(self.amount, dst);
                ::apl_instruction_codec::pack::pack_u8(self.decimals, dst);
            }

            fn unpack_payload(
                src: &mut ::apl_instruction_codec::InstructionReader<'_>,
            ) -> Result<Self, ::apl_instruction_codec::CodecError> {
                Ok(Self {
                    amount: src.read_u64("amount")?,
                    decimals: src.read_u8("decimals")?,
                })
            }
        }
    };
}

mod account;
mod amount;
mod authority;
mod initialize;

pub use {account::*, amount::*, authority::*, initialize::*};

/// Discriminants of the APL Token program, `0..=22`.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, FromPrimitive, Hash, PartialEq)]
pub enum TokenInstructionTag {
    /// Initializes a new mint
    InitializeMint = 0,
    /// Initializes a new token account
    InitializeAccount = 1,
    /// Initializes a multisignature account
    InitializeMultisig = 2,
    /// Transfers tokens between accounts
    Transfer = 3,
    /// Approves a delegate
    Approve = 4,
    /// Revokes the delegate's authority
    Revoke = 5,
    /// Sets a new authority of a mint or account
    SetAuthority = 6,
    /// Mints new tokens to an account
    MintTo = 7,
    /// Burns tokens
    Burn = 8,
    /// Closes an account
    CloseAccount = 9,
    /// Freezes an initialized account
    FreezeAccount = 10,
    /// Thaws a frozen account
    ThawAccount = 11,
    /// Transfer asserting the mint and decimals
    TransferChecked = 12,
    /// Approve asserting the mint and decimals
    ApproveChecked = 13,
    /// MintTo asserting the decimals
    MintToChecked = 14,
    /// Burn asserting the decimals
    BurnChecked = 15,
    /// InitializeAccount with the owner in instruction data
    InitializeAccount2 = 16,
    /// InitializeAccount2 without the rent sysvar
    InitializeAccount3 = 17,
    /// InitializeMint without the rent sysvar
    InitializeMint2 = 18,
    /// Queries the size of a token account
    GetAccountDataSize = 19,
    /// Marks a token account's owner as immutable
    InitializeImmutableOwner = 20,
    /// Converts a raw amount to its UI representation
    AmountToUiAmount = 21,
    /// Converts a UI amount string to a raw amount
    UiAmountToAmount = 22,
}

impl TokenInstructionTag {
    /// Map a wire byte to its tag, if the program defines one.
    pub fn from_byte(tag: u8) -> Option<Self> {
        Self::from_u8(tag)
    }
}

/// Instructions supported by the APL Token program.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TokenInstruction {
    /// See [`InitializeMint`]
    InitializeMint(InitializeMint),
    /// See [`InitializeAccount`]
    InitializeAccount(InitializeAccount),
    /// See [`InitializeMultisig`]
    InitializeMultisig(InitializeMultisig),
    /// See [`Transfer`]
    Transfer(Transfer),
    /// See [`Approve`]
    Approve(Approve),
    /// See [`Revoke`]
    Revoke(Revoke),
    /// See [`SetAuthority`]
    SetAuthority(SetAuthority),
    /// See [`MintTo`]
    MintTo(MintTo),
    /// See [`Burn`]
    Burn(Burn),
    /// See [`CloseAccount`]
    CloseAccount(CloseAccount),
    /// See [`FreezeAccount`]
    FreezeAccount(FreezeAccount),
    /// See [`ThawAccount`]
    ThawAccount(ThawAccount),
    /// See [`TransferChecked`]
    TransferChecked(TransferChecked),
    /// See [`ApproveChecked`]
    ApproveChecked(ApproveChecked),
    /// See [`MintToChecked`]
    MintToChecked(MintToChecked),
    /// See [`BurnChecked`]
    BurnChecked(BurnChecked),
    /// See [`InitializeAccount2`]
    InitializeAccount2(InitializeAccount2),
    /// See [`InitializeAccount3`]
    InitializeAccount3(InitializeAccount3),
    /// See [`InitializeMint2`]
    InitializeMint2(InitializeMint2),
    /// See [`GetAccountDataSize`]
    GetAccountDataSize(GetAccountDataSize),
    /// See [`InitializeImmutableOwner`]
    InitializeImmutableOwner(InitializeImmutableOwner),
    /// See [`AmountToUiAmount`]
    AmountToUiAmount(AmountToUiAmount),
    /// See [`UiAmountToAmount`]
    UiAmountToAmount(UiAmountToAmount),
}

impl TokenInstruction {
    /// Unpack a byte array into a TokenInstruction
    pub fn unpack(input: &[u8]) -> Result<Self, CodecError> {
        let Some(&tag) = input.first() else {
            debug!("rejecting empty token instruction buffer");
            return Err(CodecError::EmptyBuffer);
        };
        let Some(kind) = TokenInstructionTag::from_byte(tag) else {
            debug!(tag, "rejecting unknown token instruction tag");
            return Err(CodecError::UnknownInstructionTag(tag));
        };

        let instruction = match kind {
            TokenInstructionTag::InitializeMint => {
                Self::InitializeMint(InitializeMint::unpack(input)?)
            }
            TokenInstructionTag::InitializeAccount => {
                Self::InitializeAccount(InitializeAccount::unpack(input)?)
            }
            TokenInstructionTag::InitializeMultisig => {
                Self::InitializeMultisig(InitializeMultisig::unpack(input)?)
            }
            TokenInstructionTag::Transfer => Self::Transfer(Transfer::unpack(input)?),
            TokenInstructionTag::Approve => Self::Approve(Approve::unpack(input)?),
            TokenInstructionTag::Revoke => Self::Revoke(Revoke::unpack(input)?),
            TokenInstructionTag::SetAuthority => {
                Self::SetAuthority(SetAuthority::unpack(input)?)
            }
            TokenInstructionTag::MintTo => Self::MintTo(MintTo::unpack(input)?),
            TokenInstructionTag::Burn => Self::Burn(Burn::unpack(input)?),
            TokenInstructionTag::CloseAccount => {
                Self::CloseAccount(CloseAccount::unpack(input)?)
            }
            TokenInstructionTag::FreezeAccount => {
                Self::FreezeAccount(FreezeAccount::unpack(input)?)
            }
            TokenInstructionTag::ThawAccount => Self::ThawAccount(ThawAccount::unpack(input)?),
            TokenInstructionTag::TransferChecked => {
                Self::TransferChecked(TransferChecked::unpack(input)?)
            }
            TokenInstructionTag::ApproveChecked => {
                Self::ApproveChecked(ApproveChecked::unpack(input)?)
            }
            TokenInstructionTag::MintToChecked => {
                Self::MintToChecked(MintToChecked::unpack(input)?)
            }
            TokenInstructionTag::BurnChecked => Self::BurnChecked(BurnChecked::unpack(input)?),
            TokenInstructionTag::InitializeAccount2 => {
                Self::InitializeAccount2(InitializeAccount2::unpack(input)?)
            }
            TokenInstructionTag::InitializeAccount3 => {
                Self::InitializeAccount3(InitializeAccount3::unpack(input)?)
            }
            TokenInstructionTag::InitializeMint2 => {
                Self::InitializeMint2(InitializeMint2::unpack(input)?)
            }
            TokenInstructionTag::GetAccountDataSize => {
                Self::GetAccountDataSize(GetAccountDataSize::unpack(input)?)
            }
            TokenInstructionTag::InitializeImmutableOwner => {
                Self::InitializeImmutableOwner(InitializeImmutableOwner::unpack(input)?)
            }
            TokenInstructionTag::AmountToUiAmount => {
                Self::AmountToUiAmount(AmountToUiAmount::unpack(input)?)
            }
            TokenInstructionTag::UiAmountToAmount => {
                Self::UiAmountToAmount(UiAmountToAmount::unpack(input)?)
            }
        };

        trace!("Instruction: {}", instruction.name());
        Ok(instruction)
    }

    /// Pack the TokenInstruction into a byte array
    pub fn pack(&self) -> Vec<u8> {
        match self {
            Self::InitializeMint(ix) => ix.pack(),
            Self::InitializeAccount(ix) => ix.pack(),
            Self::InitializeMultisig(ix) => ix.pack(),
            Self::Transfer(ix) => ix.pack(),
            Self::Approve(ix) => ix.pack(),
            Self::Revoke(ix) => ix.pack(),
            Self::SetAuthority(ix) => ix.pack(),
            Self::MintTo(ix) => ix.pack(),
            Self::Burn(ix) => ix.pack(),
            Self::CloseAccount(ix) => ix.pack(),
            Self::FreezeAccount(ix) => ix.pack(),
            Self::ThawAccount(ix) => ix.pack(),
            Self::TransferChecked(ix) => ix.pack(),
            Self::ApproveChecked(ix) => ix.pack(),
            Self::MintToChecked(ix) => ix.pack(),
            Self::BurnChecked(ix) => ix.pack(),
            Self::InitializeAccount2(ix) => ix.pack(),
            Self::InitializeAccount3(ix) => ix.pack(),
            Self::InitializeMint2(ix) => ix.pack(),
            Self::GetAccountDataSize(ix) => ix.pack(),
            Self::InitializeImmutableOwner(ix) => ix.pack(),
            Self::AmountToUiAmount(ix) => ix.pack(),
            Self::UiAmountToAmount(ix) => ix.pack(),
        }
    }

    /// Discriminant of this instruction.
    pub fn tag(&self) -> TokenInstructionTag {
        match self {
            Self::InitializeMint(_) => TokenInstructionTag::InitializeMint,
            Self::InitializeAccount(_) => TokenInstructionTag::InitializeAccount,
            Self::InitializeMultisig(_) => TokenInstructionTag::InitializeMultisig,
            Self::Transfer(_) => TokenInstructionTag::Transfer,
            Self::Approve(_) => TokenInstructionTag::Approve,
            Self::Revoke(_) => TokenInstructionTag::Revoke,
            Self::SetAuthority(_) => TokenInstructionTag::SetAuthority,
            Self::MintTo(_) => TokenInstructionTag::MintTo,
            Self::Burn(_) => TokenInstructionTag::Burn,
            Self::CloseAccount(_) => TokenInstructionTag::CloseAccount,
            Self::FreezeAccount(_) => TokenInstructionTag::FreezeAccount,
            Self::ThawAccount(_) => TokenInstructionTag::ThawAccount,
            Self::TransferChecked(_) => TokenInstructionTag::TransferChecked,
            Self::ApproveChecked(_) => TokenInstructionTag::ApproveChecked,
            Self::MintToChecked(_) => TokenInstructionTag::MintToChecked,
            Self::BurnChecked(_) => TokenInstructionTag::BurnChecked,
            Self::InitializeAccount2(_) => TokenInstructionTag::InitializeAccount2,
            Self::InitializeAccount3(_) => TokenInstructionTag::InitializeAccount3,
            Self::InitializeMint2(_) => TokenInstructionTag::InitializeMint2,
            Self::GetAccountDataSize(_) => TokenInstructionTag::GetAccountDataSize,
            Self::InitializeImmutableOwner(_) => TokenInstructionTag::InitializeImmutableOwner,
            Self::AmountToUiAmount(_) => TokenInstructionTag::AmountToUiAmount,
            Self::UiAmountToAmount(_) => TokenInstructionTag::UiAmountToAmount,
        }
    }

    /// Instruction name, as used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::InitializeMint(_) => InitializeMint::NAME,
            Self::InitializeAccount(_) => InitializeAccount::NAME,
            Self::InitializeMultisig(_) => InitializeMultisig::NAME,
            Self::Transfer(_) => Transfer::NAME,
            Self::Approve(_) => Approve::NAME,
            Self::Revoke(_) => Revoke::NAME,
            Self::SetAuthority(_) => SetAuthority::NAME,
            Self::MintTo(_) => MintTo::NAME,
            Self::Burn(_) => Burn::NAME,
            Self::CloseAccount(_) => CloseAccount::NAME,
            Self::FreezeAccount(_) => FreezeAccount::NAME,
            Self::ThawAccount(_) => ThawAccount::NAME,
            Self::TransferChecked(_) => TransferChecked::NAME,
            Self::ApproveChecked(_) => ApproveChecked::NAME,
            Self::MintToChecked(_) => MintToChecked::NAME,
            Self::BurnChecked(_) => BurnChecked::NAME,
            Self::InitializeAccount2(_) => InitializeAccount2::NAME,
            Self::InitializeAccount3(_) => InitializeAccount3::NAME,
            Self::InitializeMint2(_) => InitializeMint2::NAME,
            Self::GetAccountDataSize(_) => GetAccountDataSize::NAME,
            Self::InitializeImmutableOwner(_) => InitializeImmutableOwner::NAME,
            Self::AmountToUiAmount(_) => AmountToUiAmount::NAME,
            Self::UiAmountToAmount(_) => UiAmountToAmount::NAME,
        }
    }
}

macro_rules! impl_from_variant {
    ($($name:ident),* $(,)?) => {
        $(
            impl From<$name> for TokenInstruction {
                fn from(ix: $name) -> Self {
                    Self::$name(ix)
                }
            }
        )*
    };
}

impl_from_variant!(
    InitializeMint,
    InitializeAccount,
    InitializeMultisig,
    Transfer,
    Approve,
    Revoke,
    SetAuthority,
    MintTo,
    Burn,
    CloseAccount,
    FreezeAccount,
    ThawAccount,
    TransferChecked,
    ApproveChecked,
    MintToChecked,
    BurnChecked,
    InitializeAccount2,
    InitializeAccount3,
    InitializeMint2,
    GetAccountDataSize,
    InitializeImmutableOwner,
    AmountToUiAmount,
    UiAmountToAmount,
);
