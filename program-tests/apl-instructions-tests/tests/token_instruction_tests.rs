use apl_instruction_codec::{COption, CodecError, InstructionData};
use apl_instructions_tests::{init_tracing, sample_pubkey};
use apl_token_sdk::instruction::*;

fn all_variants() -> Vec<TokenInstruction> {
    let key = sample_pubkey(0xAB);
    vec![
        InitializeMint {
            decimals: 6,
            mint_authority: sample_pubkey(1),
            freeze_authority: COption::Some(sample_pubkey(2)),
        }
        .into(),
        InitializeAccount.into(),
        InitializeMultisig { m: 3 }.into(),
        Transfer { amount: 500 }.into(),
        Approve { amount: 1 }.into(),
        Revoke.into(),
        SetAuthority {
            authority_type: AuthorityType::AccountOwner,
            new_authority: COption::Some(key),
        }
        .into(),
        MintTo { amount: u64::MAX }.into(),
        Burn { amount: 0 }.into(),
        CloseAccount.into(),
        FreezeAccount.into(),
        ThawAccount.into(),
        TransferChecked {
            amount: 9_007_199_254_740_993,
            decimals: 9,
        }
        .into(),
        ApproveChecked {
            amount: 2,
            decimals: 0,
        }
        .into(),
        MintToChecked {
            amount: 3,
            decimals: 18,
        }
        .into(),
        BurnChecked {
            amount: 4,
            decimals: 255,
        }
        .into(),
        InitializeAccount2 { owner: key }.into(),
        InitializeAccount3 { owner: key }.into(),
        InitializeMint2 {
            decimals: 0,
            mint_authority: key,
            freeze_authority: COption::None,
        }
        .into(),
        GetAccountDataSize.into(),
        InitializeImmutableOwner.into(),
        AmountToUiAmount { amount: 1_500_000 }.into(),
        UiAmountToAmount {
            ui_amount: "1.5".into(),
        }
        .into(),
    ]
}

#[test]
fn every_variant_round_trips_through_the_registry() {
    init_tracing();
    for ix in all_variants() {
        let bytes = ix.pack();
        assert_eq!(bytes[0], ix.tag() as u8, "{}", ix.name());
        assert_eq!(TokenInstruction::unpack(&bytes).unwrap(), ix);
    }
}

#[test]
fn tags_are_contiguous_from_zero() {
    for (expected, ix) in all_variants().iter().enumerate() {
        assert_eq!(ix.pack()[0] as usize, expected, "{}", ix.name());
    }
    assert_eq!(
        TokenInstructionTag::from_byte(22),
        Some(TokenInstructionTag::UiAmountToAmount)
    );
    assert_eq!(TokenInstructionTag::from_byte(23), None);
}

#[test]
fn transfer_scenario() {
    let bytes = Transfer { amount: 500 }.pack();
    assert_eq!(bytes, vec![3, 0xF4, 0x01, 0, 0, 0, 0, 0, 0]);
    assert_eq!(
        TokenInstruction::unpack(&bytes).unwrap(),
        TokenInstruction::Transfer(Transfer { amount: 500 })
    );
}

#[test]
fn fixed_length_variants() {
    let key = sample_pubkey(9);
    let one_byte: Vec<Vec<u8>> = vec![
        InitializeAccount.pack(),
        Revoke.pack(),
        CloseAccount.pack(),
        FreezeAccount.pack(),
        ThawAccount.pack(),
        GetAccountDataSize.pack(),
        InitializeImmutableOwner.pack(),
    ];
    for bytes in one_byte {
        assert_eq!(bytes.len(), 1);
    }

    for bytes in [
        Transfer { amount: 1 }.pack(),
        Approve { amount: 1 }.pack(),
        MintTo { amount: 1 }.pack(),
        Burn { amount: 1 }.pack(),
        AmountToUiAmount { amount: 1 }.pack(),
    ] {
        assert_eq!(bytes.len(), 9);
    }

    for bytes in [
        TransferChecked { amount: 1, decimals: 2 }.pack(),
        ApproveChecked { amount: 1, decimals: 2 }.pack(),
        MintToChecked { amount: 1, decimals: 2 }.pack(),
        BurnChecked { amount: 1, decimals: 2 }.pack(),
    ] {
        assert_eq!(bytes.len(), 10);
    }

    assert_eq!(InitializeAccount2 { owner: key }.pack().len(), 33);
    assert_eq!(InitializeAccount3 { owner: key }.pack().len(), 33);
}

#[test]
fn amounts_keep_full_u64_precision() {
    let amount = (1u64 << 53) + 1;
    let bytes = MintToChecked {
        amount,
        decimals: 9,
    }
    .pack();
    assert_eq!(&bytes[1..9], &amount.to_le_bytes());
    let decoded = MintToChecked::unpack(&bytes).unwrap();
    assert_eq!(decoded.amount, amount);
}

#[test]
fn dropping_the_last_byte_is_truncation() {
    for ix in all_variants() {
        let bytes = ix.pack();
        if bytes.len() == 1 || matches!(ix, TokenInstruction::UiAmountToAmount(_)) {
            continue;
        }
        let err = TokenInstruction::unpack(&bytes[..bytes.len() - 1]).unwrap_err();
        assert!(
            matches!(err, CodecError::TruncatedBuffer { .. }),
            "{}: {:?}",
            ix.name(),
            err
        );
        assert_eq!(err.tag(), Some(bytes[0]));
    }
}

#[test]
fn unknown_and_empty_buffers_are_rejected() {
    init_tracing();
    assert_eq!(
        TokenInstruction::unpack(&[250]),
        Err(CodecError::UnknownInstructionTag(250))
    );
    assert_eq!(
        TokenInstruction::unpack(&[23, 0, 0]),
        Err(CodecError::UnknownInstructionTag(23))
    );
    assert_eq!(TokenInstruction::unpack(&[]), Err(CodecError::EmptyBuffer));
}

#[test]
fn variant_decoder_checks_its_own_tag() {
    let approve = Approve { amount: 500 }.pack();
    assert_eq!(
        Transfer::unpack(&approve),
        Err(CodecError::WrongTag {
            name: "Transfer",
            expected: 3,
            found: 4,
        })
    );
    assert_eq!(CloseAccount::unpack(&[5]).unwrap_err().tag(), Some(5));
}

#[test]
fn trailing_bytes_are_ignored() {
    let mut bytes = Transfer { amount: 7 }.pack();
    bytes.extend_from_slice(&[0xFF, 0xFF]);
    assert_eq!(Transfer::unpack(&bytes).unwrap(), Transfer { amount: 7 });
}

#[test]
fn initialize_mint_length_follows_freeze_authority() {
    let mint_authority = sample_pubkey(1);
    let without = InitializeMint {
        decimals: 6,
        mint_authority,
        freeze_authority: COption::None,
    };
    let bytes = without.pack();
    assert_eq!(bytes.len(), 1 + 1 + 32 + 1);
    assert_eq!(bytes[0], 0);
    assert_eq!(bytes[1], 6);
    assert_eq!(&bytes[2..34], &[1u8; 32]);
    assert_eq!(bytes[34], 0);

    let with = InitializeMint {
        freeze_authority: COption::Some(sample_pubkey(0xAB)),
        ..without
    };
    let bytes = with.pack();
    assert_eq!(bytes.len(), 1 + 1 + 32 + 33);
    assert_eq!(bytes[34], 1);
    assert_eq!(&bytes[35..], &[0xABu8; 32]);
    assert_eq!(InitializeMint::unpack(&bytes).unwrap(), with);
}

#[test]
fn bad_freeze_authority_marker() {
    let mut bytes = InitializeMint2 {
        decimals: 6,
        mint_authority: sample_pubkey(1),
        freeze_authority: COption::None,
    }
    .pack();
    *bytes.last_mut().unwrap() = 2;
    assert_eq!(
        TokenInstruction::unpack(&bytes),
        Err(CodecError::InvalidOptionDiscriminant {
            tag: Some(18),
            value: 2,
        })
    );
}

#[test]
fn set_authority_layout() {
    let clear = SetAuthority {
        authority_type: AuthorityType::FreezeAccount,
        new_authority: COption::None,
    };
    assert_eq!(clear.pack(), vec![6, 1, 0]);

    let set = SetAuthority {
        authority_type: AuthorityType::CloseAccount,
        new_authority: COption::Some(sample_pubkey(0xAB)),
    };
    let bytes = set.pack();
    assert_eq!(&bytes[..3], &[6, 3, 1]);
    assert_eq!(bytes.len(), 35);
    assert_eq!(SetAuthority::unpack(&bytes).unwrap(), set);
}

#[test]
fn set_authority_rejects_unknown_authority_type() {
    assert_eq!(
        TokenInstruction::unpack(&[6, 4, 0]),
        Err(CodecError::InvalidAuthorityType {
            tag: Some(6),
            value: 4,
        })
    );
}

#[test]
fn ui_amount_string_runs_to_end_of_buffer() {
    let ix = UiAmountToAmount {
        ui_amount: "1.5".into(),
    };
    let bytes = ix.pack();
    assert_eq!(bytes, vec![22, b'1', b'.', b'5']);
    assert_eq!(UiAmountToAmount::unpack(&bytes).unwrap(), ix);

    assert_eq!(
        UiAmountToAmount::unpack(&[22]).unwrap(),
        UiAmountToAmount::default()
    );
    assert_eq!(
        TokenInstruction::unpack(&[22, 0xFF]),
        Err(CodecError::InvalidUtf8 { tag: Some(22) })
    );
}

#[test]
fn checked_amount_field_order() {
    let bytes = TransferChecked {
        amount: 0x0102_0304_0506_0708,
        decimals: 9,
    }
    .pack();
    assert_eq!(bytes, vec![12, 8, 7, 6, 5, 4, 3, 2, 1, 9]);
}

#[test]
fn initialize_multisig_and_account2_layouts() {
    assert_eq!(InitializeMultisig { m: 2 }.pack(), vec![2, 2]);
    let bytes = InitializeAccount2 {
        owner: sample_pubkey(5),
    }
    .pack();
    assert_eq!(bytes[0], 16);
    assert_eq!(&bytes[1..], &[5u8; 32]);
    assert_eq!(
        InitializeAccount3::unpack(&[17, 5, 5]),
        Err(CodecError::TruncatedBuffer {
            tag: Some(17),
            field: "owner",
            needed: 32,
            remaining: 2,
        })
    );
}
