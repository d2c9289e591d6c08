use apl_instruction_codec::{
    pack::{
        concat_bytes, pack_coption_pubkey, pack_option_string, pack_string, pack_string_pairs,
        pubkey_from_slice,
    },
    COption, CodecError, InstructionReader,
};
use apl_instructions_tests::{prefixed, sample_pubkey};

#[test]
fn optional_pubkey_wire_forms() {
    let mut absent = Vec::new();
    pack_coption_pubkey(&COption::None, &mut absent);
    assert_eq!(absent, vec![0]);

    let mut present = Vec::new();
    pack_coption_pubkey(&COption::Some(sample_pubkey(0xAB)), &mut present);
    assert_eq!(present[0], 1);
    assert_eq!(&present[1..], &[0xABu8; 32]);

    let mut bad = vec![2u8];
    bad.extend_from_slice(&[0xAB; 32]);
    assert_eq!(
        InstructionReader::new(&bad, 0).read_coption_pubkey("authority"),
        Err(CodecError::InvalidOptionDiscriminant { tag: None, value: 2 })
    );
}

#[test]
fn variable_fields_advance_the_offset() {
    let mut buf = Vec::new();
    pack_string("abc", &mut buf);
    pack_option_string(None, &mut buf);
    pack_option_string(Some("z"), &mut buf);
    pack_string_pairs(&[("k".into(), "v".into())], &mut buf);

    let mut r = InstructionReader::new(&buf, 0);
    assert_eq!(r.read_string("a").unwrap(), "abc");
    assert_eq!(r.offset(), 7);
    assert_eq!(r.read_option_string("b").unwrap(), None);
    assert_eq!(r.offset(), 8);
    assert_eq!(r.read_option_string("c").unwrap(), Some("z".to_string()));
    assert_eq!(r.offset(), 14);
    assert_eq!(
        r.read_string_pairs("d").unwrap(),
        vec![("k".to_string(), "v".to_string())]
    );
    assert_eq!(r.remaining(), 0);
}

#[test]
fn multibyte_utf8_lengths_count_bytes() {
    let mut buf = Vec::new();
    pack_string("é", &mut buf);
    assert_eq!(buf, prefixed("é"));
    assert_eq!(&buf[..4], &[2, 0, 0, 0]);
}

#[test]
fn key_length_is_checked() {
    assert_eq!(pubkey_from_slice(&[1; 32]).unwrap(), sample_pubkey(1));
    assert_eq!(
        pubkey_from_slice(&[1; 31]),
        Err(CodecError::InvalidKeyLength(31))
    );
    assert_eq!(
        pubkey_from_slice(&[1; 33]),
        Err(CodecError::InvalidKeyLength(33))
    );
}

#[test]
fn concat_preserves_order() {
    assert_eq!(
        concat_bytes(&[&[3], &[0xF4, 0x01], &[], &[0; 6]]),
        vec![3, 0xF4, 0x01, 0, 0, 0, 0, 0, 0]
    );
}

#[test]
fn error_tags() {
    assert_eq!(CodecError::EmptyBuffer.tag(), None);
    assert_eq!(CodecError::UnknownInstructionTag(250).tag(), Some(250));
    assert_eq!(
        CodecError::TruncatedBuffer {
            tag: Some(3),
            field: "amount",
            needed: 8,
            remaining: 7,
        }
        .to_string(),
        "Buffer too short for amount: needed 8 bytes, 7 remaining"
    );
}
