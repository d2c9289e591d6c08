#![deny(missing_docs)]
#![forbid(unsafe_code)]

//! APL Associated Token Account – Rust SDK
//!
//! Instructions of this program carry no payload: the data is the single tag
//! byte. Builders attach the fixed six-account list the program expects.

pub mod instruction;

use {
    solana_instruction::{AccountMeta, Instruction},
    solana_pubkey::Pubkey,
};

pub use instruction::AssociatedTokenAccountInstruction;

/// The program ID for the APL Associated Token Account program
pub fn id() -> Pubkey {
    Pubkey::new_from_array(*b"AssociatedToken11111111111111111")
}

/// The system program id: 31 zero bytes followed by `0x01`.
pub fn system_program_id() -> Pubkey {
    let mut key = [0u8; 32];
    key[31] = 1;
    Pubkey::new_from_array(key)
}

/// Derives the associated token account address for the given wallet address
/// and token mint, under the default APL Token program.
pub fn get_associated_token_address(
    wallet_address: &Pubkey,
    token_mint_address: &Pubkey,
) -> Pubkey {
    get_associated_token_address_with_program_id(
        wallet_address,
        token_mint_address,
        &apl_token_sdk::id(),
    )
}

/// Derives the associated token account address for the given wallet
/// address, token mint and token program id.
pub fn get_associated_token_address_with_program_id(
    wallet_address: &Pubkey,
    token_mint_address: &Pubkey,
    token_program_id: &Pubkey,
) -> Pubkey {
    get_associated_token_address_and_bump_seed(
        wallet_address,
        token_mint_address,
        &id(),
        token_program_id,
    )
    .0
}

/// Seeds `[wallet, token_program, mint]` under `program_id`.
pub fn get_associated_token_address_and_bump_seed(
    wallet_address: &Pubkey,
    token_mint_address: &Pubkey,
    program_id: &Pubkey,
    token_program_id: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            wallet_address.as_ref(),
            token_program_id.as_ref(),
            token_mint_address.as_ref(),
        ],
        program_id,
    )
}

/// Every key an associated-token-account instruction touches.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AssociatedTokenAccountParams {
    /// Funding account (writable, signer)
    pub payer: Pubkey,
    /// Wallet that will own the new account
    pub owner: Pubkey,
    /// Token mint of the new account
    pub mint: Pubkey,
    /// Address of the account to create
    pub associated_token: Pubkey,
    /// Token program that will own the account
    pub token_program_id: Pubkey,
    /// Associated Token Account program to invoke
    pub associated_token_program_id: Pubkey,
    /// System program used to allocate the account
    pub system_program_id: Pubkey,
}

impl AssociatedTokenAccountParams {
    /// Params for the default programs, deriving the associated address.
    pub fn new(payer: Pubkey, owner: Pubkey, mint: Pubkey) -> Self {
        let token_program_id = apl_token_sdk::id();
        Self {
            payer,
            owner,
            mint,
            associated_token: get_associated_token_address_with_program_id(
                &owner,
                &mint,
                &token_program_id,
            ),
            token_program_id,
            associated_token_program_id: id(),
            system_program_id: system_program_id(),
        }
    }

    fn accounts(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.payer, true),
            AccountMeta::new(self.associated_token, false),
            AccountMeta::new_readonly(self.owner, false),
            AccountMeta::new_readonly(self.mint, false),
            AccountMeta::new_readonly(self.system_program_id, false),
            AccountMeta::new_readonly(self.token_program_id, false),
        ]
    }
}

fn build(
    params: &AssociatedTokenAccountParams,
    kind: AssociatedTokenAccountInstruction,
) -> Instruction {
    Instruction {
        program_id: params.associated_token_program_id,
        accounts: params.accounts(),
        data: kind.pack(),
    }
}

/// Creates a `Create` instruction; fails on-chain if the account exists.
///
/// Accounts (strict order):
/// - payer (writable, signer)
/// - associated token account (writable)
/// - owner (readonly)
/// - mint (readonly)
/// - system program (readonly)
/// - token program (readonly)
pub fn create_associated_token_account(params: &AssociatedTokenAccountParams) -> Instruction {
    build(params, AssociatedTokenAccountInstruction::Create)
}

/// Creates a `CreateIdempotent` instruction, a no-op when the account
/// already exists with the right owner and mint. Same accounts as
/// [`create_associated_token_account`].
pub fn create_associated_token_account_idempotent(
    params: &AssociatedTokenAccountParams,
) -> Instruction {
    build(params, AssociatedTokenAccountInstruction::CreateIdempotent)
}
