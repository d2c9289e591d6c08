//! Instruction builders over explicit accounts
//!
//! Every builder takes the exact keys the program reads, in a struct named
//! after the instruction. Nothing is derived or validated here; see
//! [`crate::TokenMetadataClient`] for the PDA-deriving, length-checked layer.

use {
    crate::instruction::{
        CreateAttributes, CreateMetadata, MakeImmutable, ReplaceAttributes, TransferAuthority,
        UpdateMetadata,
    },
    apl_instruction_codec::{InstructionData, Pubkey},
    solana_instruction::{AccountMeta, Instruction},
};

/// Keys read by `CreateMetadata`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CreateMetadataAccounts {
    /// Funds the metadata account (writable, signer)
    pub payer: Pubkey,
    pub system_program: Pubkey,
    pub mint: Pubkey,
    /// Metadata PDA of `mint` (writable)
    pub metadata: Pubkey,
    /// Mint authority, or the freeze authority once the mint authority is cleared
    pub mint_authority: Pubkey,
}

impl CreateMetadataAccounts {
    fn to_account_metas(self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.payer, true),
            AccountMeta::new_readonly(self.system_program, false),
            AccountMeta::new_readonly(self.mint, false),
            AccountMeta::new(self.metadata, false),
            AccountMeta::new_readonly(self.mint_authority, true),
        ]
    }
}

/// Keys read by `UpdateMetadata`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct UpdateMetadataAccounts {
    pub metadata: Pubkey,
    pub update_authority: Pubkey,
}

/// Keys read by `CreateAttributes`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CreateAttributesAccounts {
    pub payer: Pubkey,
    pub system_program: Pubkey,
    pub mint: Pubkey,
    /// Attributes PDA of `mint` (writable)
    pub attributes: Pubkey,
    pub update_authority: Pubkey,
    /// Metadata PDA of `mint`, read for the authority check
    pub metadata: Pubkey,
}

impl CreateAttributesAccounts {
    fn to_account_metas(self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.payer, true),
            AccountMeta::new_readonly(self.system_program, false),
            AccountMeta::new_readonly(self.mint, false),
            AccountMeta::new(self.attributes, false),
            AccountMeta::new_readonly(self.update_authority, true),
            AccountMeta::new_readonly(self.metadata, false),
        ]
    }
}

/// Keys read by `ReplaceAttributes`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ReplaceAttributesAccounts {
    pub attributes: Pubkey,
    pub update_authority: Pubkey,
    pub metadata: Pubkey,
}

/// Keys read by `TransferAuthority` and `MakeImmutable`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AuthorityAccounts {
    pub metadata: Pubkey,
    pub current_authority: Pubkey,
}

/// Writable metadata account followed by a signing authority.
fn metadata_and_signer(metadata: Pubkey, authority: Pubkey) -> Vec<AccountMeta> {
    vec![
        AccountMeta::new(metadata, false),
        AccountMeta::new_readonly(authority, true),
    ]
}

/// Creates a `CreateMetadata` instruction.
///
/// Accounts: payer (writable, signer), system program, mint,
/// metadata (writable), mint authority (signer)
pub fn create_metadata(
    program_id: &Pubkey,
    accounts: &CreateMetadataAccounts,
    data: &CreateMetadata,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: accounts.to_account_metas(),
        data: data.pack(),
    }
}

/// Creates an `UpdateMetadata` instruction.
///
/// Accounts: metadata (writable), update authority (signer)
pub fn update_metadata(
    program_id: &Pubkey,
    accounts: &UpdateMetadataAccounts,
    data: &UpdateMetadata,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: metadata_and_signer(accounts.metadata, accounts.update_authority),
        data: data.pack(),
    }
}

/// Creates a `CreateAttributes` instruction.
///
/// Accounts: payer (writable, signer), system program, mint,
/// attributes (writable), update authority (signer), metadata
pub fn create_attributes(
    program_id: &Pubkey,
    accounts: &CreateAttributesAccounts,
    data: &CreateAttributes,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: accounts.to_account_metas(),
        data: data.pack(),
    }
}

/// Creates a `ReplaceAttributes` instruction.
///
/// Accounts: attributes (writable), update authority (signer), metadata
pub fn replace_attributes(
    program_id: &Pubkey,
    accounts: &ReplaceAttributesAccounts,
    data: &ReplaceAttributes,
) -> Instruction {
    let mut metas = metadata_and_signer(accounts.attributes, accounts.update_authority);
    metas.push(AccountMeta::new_readonly(accounts.metadata, false));
    Instruction {
        program_id: *program_id,
        accounts: metas,
        data: data.pack(),
    }
}

/// Creates a `TransferAuthority` instruction.
///
/// Accounts: metadata (writable), current authority (signer)
pub fn transfer_authority(
    program_id: &Pubkey,
    accounts: &AuthorityAccounts,
    new_authority: &Pubkey,
) -> Instruction {
    let data = TransferAuthority {
        new_authority: *new_authority,
    };
    Instruction {
        program_id: *program_id,
        accounts: metadata_and_signer(accounts.metadata, accounts.current_authority),
        data: data.pack(),
    }
}

/// Creates a `MakeImmutable` instruction.
///
/// Accounts: metadata (writable), current authority (signer)
pub fn make_immutable(program_id: &Pubkey, accounts: &AuthorityAccounts) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: metadata_and_signer(accounts.metadata, accounts.current_authority),
        data: MakeImmutable.pack(),
    }
}
