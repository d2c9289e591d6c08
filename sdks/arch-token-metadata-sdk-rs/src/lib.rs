//! Arch Token Metadata – Rust SDK
//!
//! - [`instruction`]: wire codecs for the six metadata instructions and the
//!   [`MetadataInstruction`] registry
//! - [`builder`]: instruction builders over explicit account keys
//! - [`TokenMetadataClient`]: builders that derive the PDAs from the mint,
//!   check the [`limits`], and compose the common multi-instruction flows
//!
//! Mint accounts are allocated by the caller before the flows run. Signing and
//! submission are left to the caller.

pub mod builder;
mod client;
pub mod instruction;
pub mod limits;

use solana_pubkey::Pubkey;

pub use {
    client::{NewMint, TokenMetadataClient},
    instruction::{MetadataInstruction, MetadataInstructionTag},
};

/// The program ID for the Arch Token Metadata program
pub fn id() -> Pubkey {
    Pubkey::new_from_array(*b"ArchTokenMetadata111111111111111")
}

/// The system program id: 31 zero bytes followed by `0x01`.
pub fn system_program_id() -> Pubkey {
    let mut key = [0u8; 32];
    key[31] = 1;
    Pubkey::new_from_array(key)
}

/// PDA seed for metadata account
pub const METADATA_SEED: &[u8] = b"metadata";

/// PDA seed for attributes account
pub const ATTRIBUTES_SEED: &[u8] = b"attributes";

/// Metadata PDA of `mint` and its bump.
pub fn find_metadata_pda(program_id: &Pubkey, mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[METADATA_SEED, mint.as_ref()], program_id)
}

/// Attributes PDA of `mint` and its bump.
pub fn find_attributes_pda(program_id: &Pubkey, mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[ATTRIBUTES_SEED, mint.as_ref()], program_id)
}
