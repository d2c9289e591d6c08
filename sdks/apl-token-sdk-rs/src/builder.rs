//! Instruction builders
//!
//! Each builder packs one instruction and attaches the account list the APL
//! Token program expects for it. Authorities may be a single signer, or a
//! multisignature account followed by `signer_pubkeys`.

use {
    crate::instruction::{
        AmountToUiAmount, Approve, ApproveChecked, AuthorityType, Burn, BurnChecked, CloseAccount,
        FreezeAccount, GetAccountDataSize, InitializeAccount, InitializeAccount2,
        InitializeAccount3, InitializeImmutableOwner, InitializeMint, InitializeMint2,
        InitializeMultisig, MintTo, MintToChecked, Revoke, SetAuthority, ThawAccount, Transfer,
        TransferChecked, UiAmountToAmount,
    },
    apl_instruction_codec::{COption, InstructionData, Pubkey},
    solana_instruction::{AccountMeta, Instruction},
};

fn coption(key: Option<&Pubkey>) -> COption<Pubkey> {
    match key {
        Some(key) => COption::Some(*key),
        None => COption::None,
    }
}

/// Push the authority, a signer unless multisig signers follow it.
fn push_authority(
    accounts: &mut Vec<AccountMeta>,
    authority: &Pubkey,
    signer_pubkeys: &[&Pubkey],
) {
    accounts.push(AccountMeta::new_readonly(*authority, signer_pubkeys.is_empty()));
    accounts.extend(
        signer_pubkeys
            .iter()
            .map(|signer| AccountMeta::new_readonly(**signer, true)),
    );
}

/// Creates an `InitializeMint` instruction.
///
/// Accounts: mint (writable)
pub fn initialize_mint(
    token_program_id: &Pubkey,
    mint_pubkey: &Pubkey,
    mint_authority_pubkey: &Pubkey,
    freeze_authority_pubkey: Option<&Pubkey>,
    decimals: u8,
) -> Instruction {
    let data = InitializeMint {
        decimals,
        mint_authority: *mint_authority_pubkey,
        freeze_authority: coption(freeze_authority_pubkey),
    }
    .pack();

    Instruction {
        program_id: *token_program_id,
        accounts: vec![AccountMeta::new(*mint_pubkey, false)],
        data,
    }
}

/// Creates an `InitializeMint2` instruction.
///
/// Accounts: mint (writable)
pub fn initialize_mint2(
    token_program_id: &Pubkey,
    mint_pubkey: &Pubkey,
    mint_authority_pubkey: &Pubkey,
    freeze_authority_pubkey: Option<&Pubkey>,
    decimals: u8,
) -> Instruction {
    let data = InitializeMint2 {
        decimals,
        mint_authority: *mint_authority_pubkey,
        freeze_authority: coption(freeze_authority_pubkey),
    }
    .pack();

    Instruction {
        program_id: *token_program_id,
        accounts: vec![AccountMeta::new(*mint_pubkey, false)],
        data,
    }
}

/// Creates an `InitializeAccount` instruction.
///
/// Accounts: account (writable), mint, owner
pub fn initialize_account(
    token_program_id: &Pubkey,
    account_pubkey: &Pubkey,
    mint_pubkey: &Pubkey,
    owner_pubkey: &Pubkey,
) -> Instruction {
    Instruction {
        program_id: *token_program_id,
        accounts: vec![
            AccountMeta::new(*account_pubkey, false),
            AccountMeta::new_readonly(*mint_pubkey, false),
            AccountMeta::new_readonly(*owner_pubkey, false),
        ],
        data: InitializeAccount.pack(),
    }
}

/// Creates an `InitializeAccount2` instruction.
///
/// Accounts: account (writable), mint, rent sysvar
pub fn initialize_account2(
    token_program_id: &Pubkey,
    account_pubkey: &Pubkey,
    mint_pubkey: &Pubkey,
    owner_pubkey: &Pubkey,
    rent_sysvar_pubkey: &Pubkey,
) -> Instruction {
    Instruction {
        program_id: *token_program_id,
        accounts: vec![
            AccountMeta::new(*account_pubkey, false),
            AccountMeta::new_readonly(*mint_pubkey, false),
            AccountMeta::new_readonly(*rent_sysvar_pubkey, false),
        ],
        data: InitializeAccount2 {
            owner: *owner_pubkey,
        }
        .pack(),
    }
}

/// Creates an `InitializeAccount3` instruction.
///
/// Accounts: account (writable), mint
pub fn initialize_account3(
    token_program_id: &Pubkey,
    account_pubkey: &Pubkey,
    mint_pubkey: &Pubkey,
    owner_pubkey: &Pubkey,
) -> Instruction {
    Instruction {
        program_id: *token_program_id,
        accounts: vec![
            AccountMeta::new(*account_pubkey, false),
            AccountMeta::new_readonly(*mint_pubkey, false),
        ],
        data: InitializeAccount3 {
            owner: *owner_pubkey,
        }
        .pack(),
    }
}

/// Creates an `InitializeMultisig` instruction.
///
/// Accounts: multisig (writable), then each signer (readonly)
pub fn initialize_multisig(
    token_program_id: &Pubkey,
    multisig_pubkey: &Pubkey,
    signer_pubkeys: &[&Pubkey],
    m: u8,
) -> Instruction {
    let mut accounts = Vec::with_capacity(1 + signer_pubkeys.len());
    accounts.push(AccountMeta::new(*multisig_pubkey, false));
    accounts.extend(
        signer_pubkeys
            .iter()
            .map(|signer| AccountMeta::new_readonly(**signer, false)),
    );

    Instruction {
        program_id: *token_program_id,
        accounts,
        data: InitializeMultisig { m }.pack(),
    }
}

/// Creates a `Transfer` instruction.
///
/// Accounts: source (writable), destination (writable), authority
pub fn transfer(
    token_program_id: &Pubkey,
    source_pubkey: &Pubkey,
    destination_pubkey: &Pubkey,
    authority_pubkey: &Pubkey,
    signer_pubkeys: &[&Pubkey],
    amount: u64,
) -> Instruction {
    let mut accounts = Vec::with_capacity(3 + signer_pubkeys.len());
    accounts.push(AccountMeta::new(*source_pubkey, false));
    accounts.push(AccountMeta::new(*destination_pubkey, false));
    push_authority(&mut accounts, authority_pubkey, signer_pubkeys);

    Instruction {
        program_id: *token_program_id,
        accounts,
        data: Transfer { amount }.pack(),
    }
}

/// Creates an `Approve` instruction.
///
/// Accounts: source (writable), delegate, owner
pub fn approve(
    token_program_id: &Pubkey,
    source_pubkey: &Pubkey,
    delegate_pubkey: &Pubkey,
    owner_pubkey: &Pubkey,
    signer_pubkeys: &[&Pubkey],
    amount: u64,
) -> Instruction {
    let mut accounts = Vec::with_capacity(3 + signer_pubkeys.len());
    accounts.push(AccountMeta::new(*source_pubkey, false));
    accounts.push(AccountMeta::new_readonly(*delegate_pubkey, false));
    push_authority(&mut accounts, owner_pubkey, signer_pubkeys);

    Instruction {
        program_id: *token_program_id,
        accounts,
        data: Approve { amount }.pack(),
    }
}

/// Creates a `Revoke` instruction.
///
/// Accounts: source (writable), owner
pub fn revoke(
    token_program_id: &Pubkey,
    source_pubkey: &Pubkey,
    owner_pubkey: &Pubkey,
    signer_pubkeys: &[&Pubkey],
) -> Instruction {
    let mut accounts = Vec::with_capacity(2 + signer_pubkeys.len());
    accounts.push(AccountMeta::new(*source_pubkey, false));
    push_authority(&mut accounts, owner_pubkey, signer_pubkeys);

    Instruction {
        program_id: *token_program_id,
        accounts,
        data: Revoke.pack(),
    }
}

/// Creates a `SetAuthority` instruction.
///
/// Accounts: owned mint or account (writable), current authority
pub fn set_authority(
    token_program_id: &Pubkey,
    owned_pubkey: &Pubkey,
    new_authority_pubkey: Option<&Pubkey>,
    authority_type: AuthorityType,
    owner_pubkey: &Pubkey,
    signer_pubkeys: &[&Pubkey],
) -> Instruction {
    let mut accounts = Vec::with_capacity(2 + signer_pubkeys.len());
    accounts.push(AccountMeta::new(*owned_pubkey, false));
    push_authority(&mut accounts, owner_pubkey, signer_pubkeys);

    Instruction {
        program_id: *token_program_id,
        accounts,
        data: SetAuthority {
            authority_type,
            new_authority: coption(new_authority_pubkey),
        }
        .pack(),
    }
}

/// Creates a `MintTo` instruction.
///
/// Accounts: mint (writable), destination (writable), mint authority
pub fn mint_to(
    token_program_id: &Pubkey,
    mint_pubkey: &Pubkey,
    account_pubkey: &Pubkey,
    owner_pubkey: &Pubkey,
    signer_pubkeys: &[&Pubkey],
    amount: u64,
) -> Instruction {
    let mut accounts = Vec::with_capacity(3 + signer_pubkeys.len());
    accounts.push(AccountMeta::new(*mint_pubkey, false));
    accounts.push(AccountMeta::new(*account_pubkey, false));
    push_authority(&mut accounts, owner_pubkey, signer_pubkeys);

    Instruction {
        program_id: *token_program_id,
        accounts,
        data: MintTo { amount }.pack(),
    }
}

/// Creates a `Burn` instruction.
///
/// Accounts: account (writable), mint (writable), authority
pub fn burn(
    token_program_id: &Pubkey,
    account_pubkey: &Pubkey,
    mint_pubkey: &Pubkey,
    authority_pubkey: &Pubkey,
    signer_pubkeys: &[&Pubkey],
    amount: u64,
) -> Instruction {
    let mut accounts = Vec::with_capacity(3 + signer_pubkeys.len());
    accounts.push(AccountMeta::new(*account_pubkey, false));
    accounts.push(AccountMeta::new(*mint_pubkey, false));
    push_authority(&mut accounts, authority_pubkey, signer_pubkeys);

    Instruction {
        program_id: *token_program_id,
        accounts,
        data: Burn { amount }.pack(),
    }
}

/// Creates a `CloseAccount` instruction.
///
/// Accounts: account (writable), destination (writable), owner
pub fn close_account(
    token_program_id: &Pubkey,
    account_pubkey: &Pubkey,
    destination_pubkey: &Pubkey,
    owner_pubkey: &Pubkey,
    signer_pubkeys: &[&Pubkey],
) -> Instruction {
    let mut accounts = Vec::with_capacity(3 + signer_pubkeys.len());
    accounts.push(AccountMeta::new(*account_pubkey, false));
    accounts.push(AccountMeta::new(*destination_pubkey, false));
    push_authority(&mut accounts, owner_pubkey, signer_pubkeys);

    Instruction {
        program_id: *token_program_id,
        accounts,
        data: CloseAccount.pack(),
    }
}

/// Creates a `FreezeAccount` instruction.
///
/// Accounts: account (writable), mint, freeze authority
pub fn freeze_account(
    token_program_id: &Pubkey,
    account_pubkey: &Pubkey,
    mint_pubkey: &Pubkey,
    owner_pubkey: &Pubkey,
    signer_pubkeys: &[&Pubkey],
) -> Instruction {
    let mut accounts = Vec::with_capacity(3 + signer_pubkeys.len());
    accounts.push(AccountMeta::new(*account_pubkey, false));
    accounts.push(AccountMeta::new_readonly(*mint_pubkey, false));
    push_authority(&mut accounts, owner_pubkey, signer_pubkeys);

    Instruction {
        program_id: *token_program_id,
        accounts,
        data: FreezeAccount.pack(),
    }
}

/// Creates a `ThawAccount` instruction.
///
/// Accounts: account (writable), mint, freeze authority
pub fn thaw_account(
    token_program_id: &Pubkey,
    account_pubkey: &Pubkey,
    mint_pubkey: &Pubkey,
    owner_pubkey: &Pubkey,
    signer_pubkeys: &[&Pubkey],
) -> Instruction {
    let mut accounts = Vec::with_capacity(3 + signer_pubkeys.len());
    accounts.push(AccountMeta::new(*account_pubkey, false));
    accounts.push(AccountMeta::new_readonly(*mint_pubkey, false));
    push_authority(&mut accounts, owner_pubkey, signer_pubkeys);

    Instruction {
        program_id: *token_program_id,
        accounts,
        data: ThawAccount.pack(),
    }
}

/// Creates a `TransferChecked` instruction.
///
/// Accounts: source (writable), mint, destination (writable), authority
#[allow(clippy::too_many_arguments)]
pub fn transfer_checked(
    token_program_id: &Pubkey,
    source_pubkey: &Pubkey,
    mint_pubkey: &Pubkey,
    destination_pubkey: &Pubkey,
    authority_pubkey: &Pubkey,
    signer_pubkeys: &[&Pubkey],
    amount: u64,
    decimals: u8,
) -> Instruction {
    let mut accounts = Vec::with_capacity(4 + signer_pubkeys.len());
    accounts.push(AccountMeta::new(*source_pubkey, false));
    accounts.push(AccountMeta::new_readonly(*mint_pubkey, false));
    accounts.push(AccountMeta::new(*destination_pubkey, false));
    push_authority(&mut accounts, authority_pubkey, signer_pubkeys);

    Instruction {
        program_id: *token_program_id,
        accounts,
        data: TransferChecked { amount, decimals }.pack(),
    }
}

/// Creates an `ApproveChecked` instruction.
///
/// Accounts: source (writable), mint, delegate, owner
#[allow(clippy::too_many_arguments)]
pub fn approve_checked(
    token_program_id: &Pubkey,
    source_pubkey: &Pubkey,
    mint_pubkey: &Pubkey,
    delegate_pubkey: &Pubkey,
    owner_pubkey: &Pubkey,
    signer_pubkeys: &[&Pubkey],
    amount: u64,
    decimals: u8,
) -> Instruction {
    let mut accounts = Vec::with_capacity(4 + signer_pubkeys.len());
    accounts.push(AccountMeta::new(*source_pubkey, false));
    accounts.push(AccountMeta::new_readonly(*mint_pubkey, false));
    accounts.push(AccountMeta::new_readonly(*delegate_pubkey, false));
    push_authority(&mut accounts, owner_pubkey, signer_pubkeys);

    Instruction {
        program_id: *token_program_id,
        accounts,
        data: ApproveChecked { amount, decimals }.pack(),
    }
}

/// Creates a `MintToChecked` instruction.
///
/// Accounts: mint (writable), destination (writable), mint authority
pub fn mint_to_checked(
    token_program_id: &Pubkey,
    mint_pubkey: &Pubkey,
    account_pubkey: &Pubkey,
    owner_pubkey: &Pubkey,
    signer_pubkeys: &[&Pubkey],
    amount: u64,
    decimals: u8,
) -> Instruction {
    let mut accounts = Vec::with_capacity(3 + signer_pubkeys.len());
    accounts.push(AccountMeta::new(*mint_pubkey, false));
    accounts.push(AccountMeta::new(*account_pubkey, false));
    push_authority(&mut accounts, owner_pubkey, signer_pubkeys);

    Instruction {
        program_id: *token_program_id,
        accounts,
        data: MintToChecked { amount, decimals }.pack(),
    }
}

/// Creates a `BurnChecked` instruction.
///
/// Accounts: account (writable), mint (writable), authority
pub fn burn_checked(
    token_program_id: &Pubkey,
    account_pubkey: &Pubkey,
    mint_pubkey: &Pubkey,
    authority_pubkey: &Pubkey,
    signer_pubkeys: &[&Pubkey],
    amount: u64,
    decimals: u8,
) -> Instruction {
    let mut accounts = Vec::with_capacity(3 + signer_pubkeys.len());
    accounts.push(AccountMeta::new(*account_pubkey, false));
    accounts.push(AccountMeta::new(*mint_pubkey, false));
    push_authority(&mut accounts, authority_pubkey, signer_pubkeys);

    Instruction {
        program_id: *token_program_id,
        accounts,
        data: BurnChecked { amount, decimals }.pack(),
    }
}

/// Creates a `GetAccountDataSize` instruction.
///
/// Accounts: mint
pub fn get_account_data_size(token_program_id: &Pubkey, mint_pubkey: &Pubkey) -> Instruction {
    Instruction {
        program_id: *token_program_id,
        accounts: vec![AccountMeta::new_readonly(*mint_pubkey, false)],
        data: GetAccountDataSize.pack(),
    }
}

/// Creates an `InitializeImmutableOwner` instruction.
///
/// Accounts: account (writable)
pub fn initialize_immutable_owner(
    token_program_id: &Pubkey,
    account_pubkey: &Pubkey,
) -> Instruction {
    Instruction {
        program_id: *token_program_id,
        accounts: vec![AccountMeta::new(*account_pubkey, false)],
        data: InitializeImmutableOwner.pack(),
    }
}

/// Creates an `AmountToUiAmount` instruction.
///
/// Accounts: mint
pub fn amount_to_ui_amount(
    token_program_id: &Pubkey,
    mint_pubkey: &Pubkey,
    amount: u64,
) -> Instruction {
    Instruction {
        program_id: *token_program_id,
        accounts: vec![AccountMeta::new_readonly(*mint_pubkey, false)],
        data: AmountToUiAmount { amount }.pack(),
    }
}

/// Creates a `UiAmountToAmount` instruction.
///
/// Accounts: mint
pub fn ui_amount_to_amount(
    token_program_id: &Pubkey,
    mint_pubkey: &Pubkey,
    ui_amount: &str,
) -> Instruction {
    Instruction {
        program_id: *token_program_id,
        accounts: vec![AccountMeta::new_readonly(*mint_pubkey, false)],
        data: UiAmountToAmount {
            ui_amount: ui_amount.to_string(),
        }
        .pack(),
    }
}
