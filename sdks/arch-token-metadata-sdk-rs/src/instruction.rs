//! Instruction types

use {
    apl_instruction_codec::{
        pack::{
            option_string_len, pack_bool, pack_option_string, pack_pubkey, pack_string,
            pack_string_pairs, string_len, string_pairs_len, PUBKEY_LEN,
        },
        CodecError, InstructionData, InstructionReader, Pubkey,
    },
    num_derive::FromPrimitive,
    num_traits::FromPrimitive,
    tracing::{debug, trace},
};

/// Discriminants of the Arch Token Metadata program, `0..=5`.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, FromPrimitive, Hash, PartialEq)]
pub enum MetadataInstructionTag {
    /// Create core metadata for a token
    CreateMetadata = 0,
    /// Update core metadata
    UpdateMetadata = 1,
    /// Create metadata attributes
    CreateAttributes = 2,
    /// Replace metadata attributes
    ReplaceAttributes = 3,
    /// Transfer update authority
    TransferAuthority = 4,
    /// Make metadata immutable
    MakeImmutable = 5,
}

/// Create core metadata for a token
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CreateMetadata {
    /// The name of the token
    pub name: String,
    /// The symbol of the token
    pub symbol: String,
    /// The image URI for the token
    pub image: String,
    /// The description of the token
    pub description: String,
    /// If true, metadata is immutable (no updates allowed)
    pub immutable: bool,
}

impl InstructionData for CreateMetadata {
    const TAG: u8 = MetadataInstructionTag::CreateMetadata as u8;
    const NAME: &'static str = "CreateMetadata";

    fn payload_len(&self) -> usize {
        string_len(&self.name)
            + string_len(&self.symbol)
            + string_len(&self.image)
            + string_len(&self.description)
            + 1
    }

    fn pack_payload(&self, dst: &mut Vec<u8>) {
        pack_string(&self.name, dst);
        pack_string(&self.symbol, dst);
        pack_string(&self.image, dst);
        pack_string(&self.description, dst);
        pack_bool(self.immutable, dst);
    }

    fn unpack_payload(src: &mut InstructionReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            name: src.read_string("name")?,
            symbol: src.read_string("symbol")?,
            image: src.read_string("image")?,
            description: src.read_string("description")?,
            immutable: src.read_bool("immutable")?,
        })
    }
}

/// Update core metadata; `None` fields are left unchanged
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UpdateMetadata {
    /// Optional new name for the token
    pub name: Option<String>,
    /// Optional new symbol for the token
    pub symbol: Option<String>,
    /// Optional new image URI for the token
    pub image: Option<String>,
    /// Optional new description for the token
    pub description: Option<String>,
}

impl InstructionData for UpdateMetadata {
    const TAG: u8 = MetadataInstructionTag::UpdateMetadata as u8;
    const NAME: &'static str = "UpdateMetadata";

    fn payload_len(&self) -> usize {
        option_string_len(self.name.as_deref())
            + option_string_len(self.symbol.as_deref())
            + option_string_len(self.image.as_deref())
            + option_string_len(self.description.as_deref())
    }

    fn pack_payload(&self, dst: &mut Vec<u8>) {
        pack_option_string(self.name.as_deref(), dst);
        pack_option_string(self.symbol.as_deref(), dst);
        pack_option_string(self.image.as_deref(), dst);
        pack_option_string(self.description.as_deref(), dst);
    }

    fn unpack_payload(src: &mut InstructionReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            name: src.read_option_string("name")?,
            symbol: src.read_option_string("symbol")?,
            image: src.read_option_string("image")?,
            description: src.read_option_string("description")?,
        })
    }
}

macro_rules! attributes_instruction {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, Eq, PartialEq)]
        pub struct $name {
            /// Key-value pairs for extensible attributes, in order
            pub data: Vec<(String, String)>,
        }

        impl InstructionData for $name {
            const TAG: u8 = MetadataInstructionTag::$name as u8;
            const NAME: &'static str = stringify!($name);

            fn payload_len(&self) -> usize {
                string_pairs_len(&self.data)
            }

            fn pack_payload(&self, dst: &mut Vec<u8>) {
                pack_string_pairs(&self.data, dst);
            }

            fn unpack_payload(src: &mut InstructionReader<'_>) -> Result<Self, CodecError> {
                Ok(Self {
                    data: src.read_string_pairs("data")?,
                })
            }
        }
    };
}

attributes_instruction!(
    /// Create metadata attributes
    CreateAttributes
);

attributes_instruction!(
    /// Replace metadata attributes wholesale
    ReplaceAttributes
);

/// Transfer update authority (must provide a new authority)
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TransferAuthority {
    /// New authority to transfer to
    pub new_authority: Pubkey,
}

impl InstructionData for TransferAuthority {
    const TAG: u8 = MetadataInstructionTag::TransferAuthority as u8;
    const NAME: &'static str = "TransferAuthority";

    fn payload_len(&self) -> usize {
        PUBKEY_LEN
    }

    fn pack_payload(&self, dst: &mut Vec<u8>) {
        pack_pubkey(&self.new_authority, dst);
    }

    fn unpack_payload(src: &mut InstructionReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            new_authority: src.read_pubkey("new_authority")?,
        })
    }
}

/// Make metadata immutable (revoke update authority)
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MakeImmutable;

impl InstructionData for MakeImmutable {
    const TAG: u8 = MetadataInstructionTag::MakeImmutable as u8;
    const NAME: &'static str = "MakeImmutable";

    fn payload_len(&self) -> usize {
        0
    }

    fn pack_payload(&self, _dst: &mut Vec<u8>) {}

    fn unpack_payload(_src: &mut InstructionReader<'_>) -> Result<Self, CodecError> {
        Ok(Self)
    }
}

/// Instructions supported by the token metadata program.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MetadataInstruction {
    /// See [`CreateMetadata`]
    CreateMetadata(CreateMetadata),
    /// See [`UpdateMetadata`]
    UpdateMetadata(UpdateMetadata),
    /// See [`CreateAttributes`]
    CreateAttributes(CreateAttributes),
    /// See [`ReplaceAttributes`]
    ReplaceAttributes(ReplaceAttributes),
    /// See [`TransferAuthority`]
    TransferAuthority(TransferAuthority),
    /// See [`MakeImmutable`]
    MakeImmutable(MakeImmutable),
}

impl MetadataInstruction {
    /// Unpack a byte array into a MetadataInstruction
    pub fn unpack(input: &[u8]) -> Result<Self, CodecError> {
        let Some(&tag) = input.first() else {
            debug!("rejecting empty metadata instruction buffer");
            return Err(CodecError::EmptyBuffer);
        };
        let Some(kind) = MetadataInstructionTag::from_u8(tag) else {
            debug!(tag, "rejecting unknown metadata instruction tag");
            return Err(CodecError::UnknownInstructionTag(tag));
        };

        let instruction = match kind {
            MetadataInstructionTag::CreateMetadata => {
                Self::CreateMetadata(CreateMetadata::unpack(input)?)
            }
            MetadataInstructionTag::UpdateMetadata => {
                Self::UpdateMetadata(UpdateMetadata::unpack(input)?)
            }
            MetadataInstructionTag::CreateAttributes => {
                Self::CreateAttributes(CreateAttributes::unpack(input)?)
            }
            MetadataInstructionTag::ReplaceAttributes => {
                Self::ReplaceAttributes(ReplaceAttributes::unpack(input)?)
            }
            MetadataInstructionTag::TransferAuthority => {
                Self::TransferAuthority(TransferAuthority::unpack(input)?)
            }
            MetadataInstructionTag::MakeImmutable => {
                Self::MakeImmutable(MakeImmutable::unpack(input)?)
            }
        };

        trace!("Instruction: {}", instruction.name());
        Ok(instruction)
    }

    /// Pack the MetadataInstruction into a byte array
    pub fn pack(&self) -> Vec<u8> {
        match self {
            Self::CreateMetadata(ix) => ix.pack(),
            Self::UpdateMetadata(ix) => ix.pack(),
            Self::CreateAttributes(ix) => ix.pack(),
            Self::ReplaceAttributes(ix) => ix.pack(),
            Self::TransferAuthority(ix) => ix.pack(),
            Self::MakeImmutable(ix) => ix.pack(),
        }
    }

    /// Discriminant of this instruction.
    pub fn tag(&self) -> MetadataInstructionTag {
        match self {
            Self::CreateMetadata(_) => MetadataInstructionTag::CreateMetadata,
            Self::UpdateMetadata(_) => MetadataInstructionTag::UpdateMetadata,
            Self::CreateAttributes(_) => MetadataInstructionTag::CreateAttributes,
            Self::ReplaceAttributes(_) => MetadataInstructionTag::ReplaceAttributes,
            Self::TransferAuthority(_) => MetadataInstructionTag::TransferAuthority,
            Self::MakeImmutable(_) => MetadataInstructionTag::MakeImmutable,
        }
    }

    /// Instruction name, as used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateMetadata(_) => CreateMetadata::NAME,
            Self::UpdateMetadata(_) => UpdateMetadata::NAME,
            Self::CreateAttributes(_) => CreateAttributes::NAME,
            Self::ReplaceAttributes(_) => ReplaceAttributes::NAME,
            Self::TransferAuthority(_) => TransferAuthority::NAME,
            Self::MakeImmutable(_) => MakeImmutable::NAME,
        }
    }
}

macro_rules! impl_from_variant {
    ($($name:ident),* $(,)?) => {
        $(
            impl From<$name> for MetadataInstruction {
                fn from(ix: $name) -> Self {
                    Self::$name(ix)
                }
            }
        )*
    };
}

impl_from_variant!(
    CreateMetadata,
    UpdateMetadata,
    CreateAttributes,
    ReplaceAttributes,
    TransferAuthority,
    MakeImmutable,
);
