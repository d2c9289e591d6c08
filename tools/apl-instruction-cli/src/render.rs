//! JSON views of decoded instructions. Keys are rendered as hex.

use apl_instruction_codec::{COption, Pubkey};
use apl_token_sdk::instruction::TokenInstruction;
use arch_token_metadata_sdk::MetadataInstruction;
use serde_json::{json, Value};

fn key(k: &Pubkey) -> Value {
    Value::String(hex::encode(k))
}

fn coption(k: &COption<Pubkey>) -> Value {
    match k {
        COption::Some(k) => key(k),
        COption::None => Value::Null,
    }
}

pub fn token(ix: &TokenInstruction) -> Value {
    use TokenInstruction as T;

    let fields = match ix {
        T::InitializeMint(i) => json!({
            "decimals": i.decimals,
            "mint_authority": key(&i.mint_authority),
            "freeze_authority": coption(&i.freeze_authority),
        }),
        T::InitializeMint2(i) => json!({
            "decimals": i.decimals,
            "mint_authority": key(&i.mint_authority),
            "freeze_authority": coption(&i.freeze_authority),
        }),
        T::InitializeMultisig(i) => json!({ "m": i.m }),
        T::InitializeAccount2(i) => json!({ "owner": key(&i.owner) }),
        T::InitializeAccount3(i) => json!({ "owner": key(&i.owner) }),
        T::Transfer(i) => json!({ "amount": i.amount }),
        T::Approve(i) => json!({ "amount": i.amount }),
        T::MintTo(i) => json!({ "amount": i.amount }),
        T::Burn(i) => json!({ "amount": i.amount }),
        T::AmountToUiAmount(i) => json!({ "amount": i.amount }),
        T::TransferChecked(i) => json!({ "amount": i.amount, "decimals": i.decimals }),
        T::ApproveChecked(i) => json!({ "amount": i.amount, "decimals": i.decimals }),
        T::MintToChecked(i) => json!({ "amount": i.amount, "decimals": i.decimals }),
        T::BurnChecked(i) => json!({ "amount": i.amount, "decimals": i.decimals }),
        T::SetAuthority(i) => json!({
            "authority_type": format!("{:?}", i.authority_type),
            "new_authority": coption(&i.new_authority),
        }),
        T::UiAmountToAmount(i) => json!({ "ui_amount": i.ui_amount }),
        T::InitializeAccount(_)
        | T::Revoke(_)
        | T::CloseAccount(_)
        | T::FreezeAccount(_)
        | T::ThawAccount(_)
        | T::GetAccountDataSize(_)
        | T::InitializeImmutableOwner(_) => json!({}),
    };

    json!({
        "program": "apl-token",
        "tag": ix.tag() as u8,
        "instruction": ix.name(),
        "fields": fields,
    })
}

pub fn metadata(ix: &MetadataInstruction) -> Value {
    use MetadataInstruction as M;

    let fields = match ix {
        M::CreateMetadata(i) => json!({
            "name": i.name,
            "symbol": i.symbol,
            "image": i.image,
            "description": i.description,
            "immutable": i.immutable,
        }),
        M::UpdateMetadata(i) => json!({
            "name": i.name,
            "symbol": i.symbol,
            "image": i.image,
            "description": i.description,
        }),
        M::CreateAttributes(i) => json!({ "data": i.data }),
        M::ReplaceAttributes(i) => json!({ "data": i.data }),
        M::TransferAuthority(i) => json!({ "new_authority": key(&i.new_authority) }),
        M::MakeImmutable(_) => json!({}),
    };

    json!({
        "program": "arch-token-metadata",
        "tag": ix.tag() as u8,
        "instruction": ix.name(),
        "fields": fields,
    })
}
