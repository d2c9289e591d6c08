#![deny(missing_docs)]
#![forbid(unsafe_code)]

//! Instruction data codec shared by the APL token, Arch token metadata and
//! associated token account SDKs.
//!
//! The wire format is a one-byte tag followed by the variant's fields with no
//! padding: little-endian integers, raw 32-byte keys, `u32`-length-prefixed
//! UTF-8 strings, presence-flagged optionals and `u32`-count-prefixed lists.

pub mod error;
pub mod instruction;
pub mod pack;
pub mod reader;

pub use {
    error::CodecError, instruction::InstructionData, reader::InstructionReader,
    solana_program_option::COption, solana_pubkey::Pubkey,
};
