use anyhow::Context;
use apl_associated_token_account_sdk::{
    get_associated_token_address_and_bump_seed, AssociatedTokenAccountInstruction,
};
use apl_instruction_codec::{COption, InstructionData};
use apl_token_sdk::instruction::{
    AmountToUiAmount, Approve, ApproveChecked, AuthorityType, Burn, BurnChecked, CloseAccount,
    FreezeAccount, GetAccountDataSize, InitializeAccount, InitializeAccount2, InitializeAccount3,
    InitializeImmutableOwner, InitializeMint, InitializeMint2, InitializeMultisig, MintTo,
    MintToChecked, Revoke, SetAuthority, ThawAccount, Transfer, TransferChecked,
    UiAmountToAmount,
};
use arch_token_metadata_sdk::{
    find_attributes_pda, find_metadata_pda, id as program_id_fn,
    instruction::{
        CreateAttributes, CreateMetadata, MakeImmutable, ReplaceAttributes, TransferAuthority,
        UpdateMetadata,
    },
    system_program_id,
};
use serde_json::{json, Value};
use solana_pubkey::Pubkey;

fn hex_of(ix: &impl InstructionData) -> Value {
    Value::String(hex::encode(ix.pack()))
}

fn token_fixtures() -> Value {
    let authority = Pubkey::new_from_array([1u8; 32]);
    let freeze = Pubkey::new_from_array([4u8; 32]);
    let owner = Pubkey::new_from_array([5u8; 32]);

    json!({
        "InitializeMint": hex_of(&InitializeMint {
            decimals: 9,
            mint_authority: authority,
            freeze_authority: COption::None,
        }),
        "InitializeMintWithFreeze": hex_of(&InitializeMint {
            decimals: 6,
            mint_authority: authority,
            freeze_authority: COption::Some(freeze),
        }),
        "InitializeAccount": hex_of(&InitializeAccount),
        "InitializeMultisig": hex_of(&InitializeMultisig { m: 2 }),
        "Transfer": hex_of(&Transfer { amount: 500 }),
        "Approve": hex_of(&Approve { amount: 1_000 }),
        "Revoke": hex_of(&Revoke),
        "SetAuthorityMintNone": hex_of(&SetAuthority {
            authority_type: AuthorityType::MintTokens,
            new_authority: COption::None,
        }),
        "SetAuthorityCloseSome": hex_of(&SetAuthority {
            authority_type: AuthorityType::CloseAccount,
            new_authority: COption::Some(owner),
        }),
        "MintTo": hex_of(&MintTo { amount: u64::MAX }),
        "Burn": hex_of(&Burn { amount: 1 }),
        "CloseAccount": hex_of(&CloseAccount),
        "FreezeAccount": hex_of(&FreezeAccount),
        "ThawAccount": hex_of(&ThawAccount),
        "TransferChecked": hex_of(&TransferChecked { amount: 500, decimals: 9 }),
        "ApproveChecked": hex_of(&ApproveChecked { amount: 42, decimals: 2 }),
        "MintToChecked": hex_of(&MintToChecked { amount: 1 << 53, decimals: 0 }),
        "BurnChecked": hex_of(&BurnChecked { amount: 7, decimals: 9 }),
        "InitializeAccount2": hex_of(&InitializeAccount2 { owner }),
        "InitializeAccount3": hex_of(&InitializeAccount3 { owner }),
        "InitializeMint2": hex_of(&InitializeMint2 {
            decimals: 9,
            mint_authority: authority,
            freeze_authority: COption::Some(freeze),
        }),
        "GetAccountDataSize": hex_of(&GetAccountDataSize),
        "InitializeImmutableOwner": hex_of(&InitializeImmutableOwner),
        "AmountToUiAmount": hex_of(&AmountToUiAmount { amount: 1_500_000 }),
        "UiAmountToAmount": hex_of(&UiAmountToAmount { ui_amount: "1.5".into() }),
        "TokenProgramId": hex::encode(apl_token_sdk::id()),
    })
}

fn metadata_fixtures() -> Value {
    let create = CreateMetadata {
        name: "Name".into(),
        symbol: "SYM".into(),
        image: "https://i".into(),
        description: "desc".into(),
        immutable: false,
    };
    let update = UpdateMetadata {
        name: Some("New".into()),
        symbol: None,
        image: None,
        description: None,
    };
    let create_attrs = CreateAttributes {
        data: vec![("k1".into(), "v1".into()), ("k2".into(), "v2".into())],
    };
    let replace_attrs = ReplaceAttributes {
        data: vec![("a".into(), "1".into())],
    };
    let transfer = TransferAuthority {
        new_authority: Pubkey::new_from_array([7u8; 32]),
    };

    let program_id = program_id_fn();
    let pda_samples: Vec<Value> = [[2u8; 32], [3u8; 32]]
        .into_iter()
        .map(Pubkey::new_from_array)
        .map(|mint| {
            let (metadata, _) = find_metadata_pda(&program_id, &mint);
            let (attributes, _) = find_attributes_pda(&program_id, &mint);
            json!({
                "mint": hex::encode(mint),
                "metadata": hex::encode(metadata),
                "attributes": hex::encode(attributes),
            })
        })
        .collect();

    json!({
        "CreateMetadata": hex_of(&create),
        "UpdateMetadata": hex_of(&update),
        "CreateAttributes": hex_of(&create_attrs),
        "ReplaceAttributes": hex_of(&replace_attrs),
        "TransferAuthority": hex_of(&transfer),
        "MakeImmutable": hex_of(&MakeImmutable),
        "SystemProgram": hex::encode(system_program_id()),
        "ProgramId": hex::encode(program_id),
        "PdaSamples": pda_samples,
    })
}

fn ata_fixtures() -> Value {
    let owner = Pubkey::new_from_array([5u8; 32]);
    let mint = Pubkey::new_from_array([2u8; 32]);
    let (address, bump) = get_associated_token_address_and_bump_seed(
        &owner,
        &mint,
        &apl_associated_token_account_sdk::id(),
        &apl_token_sdk::id(),
    );

    json!({
        "Create": hex::encode(AssociatedTokenAccountInstruction::Create.pack()),
        "CreateIdempotent": hex::encode(AssociatedTokenAccountInstruction::CreateIdempotent.pack()),
        "ProgramId": hex::encode(apl_associated_token_account_sdk::id()),
        "AddressSample": {
            "owner": hex::encode(owner),
            "mint": hex::encode(mint),
            "address": hex::encode(address),
            "bump": bump,
        },
    })
}

fn main() -> anyhow::Result<()> {
    let out_dir = std::env::var("OUT_FIXTURES_DIR").unwrap_or_else(|_| "fixtures".to_string());
    std::fs::create_dir_all(&out_dir).context("create fixtures dir")?;

    for (file, fixtures) in [
        ("token_instructions.json", token_fixtures()),
        ("metadata_instructions.json", metadata_fixtures()),
        ("associated_token_account_instructions.json", ata_fixtures()),
    ] {
        let path = format!("{}/{}", out_dir, file);
        std::fs::write(&path, serde_json::to_vec_pretty(&fixtures)?)
            .with_context(|| format!("write {}", path))?;
        println!("wrote fixtures to {}", path);
    }
    Ok(())
}
