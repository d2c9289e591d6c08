use apl_instruction_codec::{CodecError, InstructionData};
use apl_instructions_tests::{init_tracing, prefixed, sample_pubkey};
use arch_token_metadata_sdk::instruction::*;
use borsh::{BorshDeserialize, BorshSerialize};

/// Same instruction set expressed as a borsh enum, the way the on-chain
/// program decodes it.
#[derive(BorshSerialize, BorshDeserialize, Debug, PartialEq)]
enum BorshMetadataInstruction {
    CreateMetadata {
        name: String,
        symbol: String,
        image: String,
        description: String,
        immutable: bool,
    },
    UpdateMetadata {
        name: Option<String>,
        symbol: Option<String>,
        image: Option<String>,
        description: Option<String>,
    },
    CreateAttributes {
        data: Vec<(String, String)>,
    },
    ReplaceAttributes {
        data: Vec<(String, String)>,
    },
    TransferAuthority {
        new_authority: [u8; 32],
    },
    MakeImmutable,
}

fn sample_instructions() -> Vec<(MetadataInstruction, BorshMetadataInstruction)> {
    vec![
        (
            CreateMetadata {
                name: "Name".into(),
                symbol: "SYM".into(),
                image: "https://i".into(),
                description: "desc".into(),
                immutable: true,
            }
            .into(),
            BorshMetadataInstruction::CreateMetadata {
                name: "Name".into(),
                symbol: "SYM".into(),
                image: "https://i".into(),
                description: "desc".into(),
                immutable: true,
            },
        ),
        (
            UpdateMetadata {
                name: Some("New".into()),
                symbol: None,
                image: Some(String::new()),
                description: None,
            }
            .into(),
            BorshMetadataInstruction::UpdateMetadata {
                name: Some("New".into()),
                symbol: None,
                image: Some(String::new()),
                description: None,
            },
        ),
        (
            CreateAttributes {
                data: vec![("k1".into(), "v1".into()), ("k2".into(), "v2".into())],
            }
            .into(),
            BorshMetadataInstruction::CreateAttributes {
                data: vec![("k1".into(), "v1".into()), ("k2".into(), "v2".into())],
            },
        ),
        (
            ReplaceAttributes { data: vec![] }.into(),
            BorshMetadataInstruction::ReplaceAttributes { data: vec![] },
        ),
        (
            TransferAuthority {
                new_authority: sample_pubkey(7),
            }
            .into(),
            BorshMetadataInstruction::TransferAuthority {
                new_authority: [7u8; 32],
            },
        ),
        (
            MakeImmutable.into(),
            BorshMetadataInstruction::MakeImmutable,
        ),
    ]
}

#[test]
fn wire_layout_matches_borsh() {
    for (ix, borsh_ix) in sample_instructions() {
        let packed = ix.pack();
        assert_eq!(packed, borsh::to_vec(&borsh_ix).unwrap(), "{}", ix.name());
        assert_eq!(
            borsh::from_slice::<BorshMetadataInstruction>(&packed).unwrap(),
            borsh_ix
        );
    }
}

#[test]
fn every_variant_round_trips_through_the_registry() {
    init_tracing();
    for (tag, (ix, _)) in sample_instructions().into_iter().enumerate() {
        let packed = ix.pack();
        assert_eq!(packed[0] as usize, tag);
        assert_eq!(ix.tag() as usize, tag);
        assert_eq!(MetadataInstruction::unpack(&packed).unwrap(), ix);
    }
}

#[test]
fn create_attributes_example() {
    let ix = CreateAttributes {
        data: vec![("color".into(), "red".into())],
    };
    let mut expected = vec![2u8, 1, 0, 0, 0];
    expected.extend(prefixed("color"));
    expected.extend(prefixed("red"));
    assert_eq!(ix.pack(), expected);
    assert_eq!(ix.packed_len(), expected.len());
}

#[test]
fn attribute_order_is_preserved() {
    let data = vec![
        ("b".to_string(), "2".to_string()),
        ("a".to_string(), "1".to_string()),
        ("b".to_string(), "3".to_string()),
    ];
    let ix = ReplaceAttributes { data: data.clone() };
    assert_eq!(ReplaceAttributes::unpack(&ix.pack()).unwrap().data, data);
}

#[test]
fn create_metadata_layout() {
    let ix = CreateMetadata {
        name: "N".into(),
        symbol: "S".into(),
        image: "i".into(),
        description: "d".into(),
        immutable: false,
    };
    let mut expected = vec![0u8];
    for field in ["N", "S", "i", "d"] {
        expected.extend(prefixed(field));
    }
    expected.push(0);
    assert_eq!(ix.pack(), expected);

    // any nonzero flag decodes as immutable
    *expected.last_mut().unwrap() = 7;
    assert!(CreateMetadata::unpack(&expected).unwrap().immutable);
}

#[test]
fn update_metadata_absent_fields_are_single_zero_bytes() {
    assert_eq!(UpdateMetadata::default().pack(), vec![1, 0, 0, 0, 0]);
    assert_eq!(
        MetadataInstruction::unpack(&[1, 0, 2, 0, 0]),
        Err(CodecError::InvalidOptionDiscriminant {
            tag: Some(1),
            value: 2,
        })
    );
}

#[test]
fn transfer_authority_and_make_immutable_lengths() {
    let ix = TransferAuthority {
        new_authority: sample_pubkey(0xCD),
    };
    let packed = ix.pack();
    assert_eq!(packed.len(), 33);
    assert_eq!(packed[0], 4);
    assert_eq!(MakeImmutable.pack(), vec![5]);
}

#[test]
fn truncated_string_is_rejected() {
    let mut packed = CreateMetadata {
        name: "Name".into(),
        ..Default::default()
    }
    .pack();
    packed.truncate(6);
    assert!(matches!(
        MetadataInstruction::unpack(&packed),
        Err(CodecError::TruncatedBuffer {
            tag: Some(0),
            field: "name",
            ..
        })
    ));
}

#[test]
fn dropping_the_last_byte_of_transfer_authority_is_truncation() {
    let packed = TransferAuthority {
        new_authority: sample_pubkey(9),
    }
    .pack();
    assert_eq!(packed.len(), 33);

    let err = MetadataInstruction::unpack(&packed[..32]).unwrap_err();
    assert_eq!(
        err,
        CodecError::TruncatedBuffer {
            tag: Some(4),
            field: "new_authority",
            needed: 32,
            remaining: 31,
        }
    );
    assert_eq!(err.tag(), Some(4));
}

#[test]
fn tag_space_is_separate_from_token_program() {
    assert_eq!(
        MetadataInstruction::unpack(&[6]),
        Err(CodecError::UnknownInstructionTag(6))
    );
    assert_eq!(MetadataInstruction::unpack(&[]), Err(CodecError::EmptyBuffer));

    // a token Transfer is not a valid metadata ReplaceAttributes
    let transfer = [3u8, 0xF4, 0x01, 0, 0, 0, 0, 0, 0];
    assert!(matches!(
        MetadataInstruction::unpack(&transfer),
        Err(CodecError::TruncatedBuffer { .. })
    ));
}

#[test]
fn variant_decoder_checks_its_own_tag() {
    assert_eq!(
        MakeImmutable::unpack(&[4]),
        Err(CodecError::WrongTag {
            name: "MakeImmutable",
            expected: 5,
            found: 4,
        })
    );
}
