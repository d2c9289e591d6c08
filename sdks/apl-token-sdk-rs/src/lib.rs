#![deny(missing_docs)]
#![forbid(unsafe_code)]

//! APL Token – Rust SDK (client-side helpers)
//!
//! This crate provides:
//! - one codec per token instruction (tags `0..=22`), see [`instruction`]
//! - the [`instruction::TokenInstruction`] registry that packs any variant and
//!   unpacks any buffer by its leading tag
//! - instruction builders with the account ordering the program expects, see
//!   [`builder`]

pub mod builder;
pub mod instruction;

pub use apl_instruction_codec::{COption, CodecError, InstructionData, Pubkey};

/// The program ID for the APL Token program
pub fn id() -> Pubkey {
    Pubkey::new_from_array(*b"AplToken111111111111111111111111")
}
