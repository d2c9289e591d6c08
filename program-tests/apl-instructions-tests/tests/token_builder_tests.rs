use apl_instruction_codec::COption;
use apl_instructions_tests::{account_flags, sample_pubkey};
use apl_token_sdk::{
    builder,
    instruction::{AuthorityType, SetAuthority, TokenInstruction, Transfer},
};

#[test]
fn transfer_single_authority() {
    let program_id = apl_token_sdk::id();
    let (source, destination, authority) = (sample_pubkey(1), sample_pubkey(2), sample_pubkey(3));

    let ix = builder::transfer(&program_id, &source, &destination, &authority, &[], 500);

    assert_eq!(ix.program_id, program_id);
    assert_eq!(
        account_flags(&ix),
        vec![
            (source, false, true),
            (destination, false, true),
            (authority, true, false),
        ]
    );
    assert_eq!(
        TokenInstruction::unpack(&ix.data).unwrap(),
        TokenInstruction::Transfer(Transfer { amount: 500 })
    );
}

#[test]
fn transfer_multisig_authority() {
    let program_id = apl_token_sdk::id();
    let (source, destination, multisig) = (sample_pubkey(1), sample_pubkey(2), sample_pubkey(3));
    let (s1, s2) = (sample_pubkey(10), sample_pubkey(11));

    let ix = builder::transfer(&program_id, &source, &destination, &multisig, &[&s1, &s2], 1);

    assert_eq!(
        account_flags(&ix),
        vec![
            (source, false, true),
            (destination, false, true),
            (multisig, false, false),
            (s1, true, false),
            (s2, true, false),
        ]
    );
}

#[test]
fn initialize_mint_accounts_and_data() {
    let program_id = apl_token_sdk::id();
    let (mint, authority, freeze) = (sample_pubkey(1), sample_pubkey(2), sample_pubkey(3));

    let ix = builder::initialize_mint(&program_id, &mint, &authority, Some(&freeze), 6);
    assert_eq!(account_flags(&ix), vec![(mint, false, true)]);
    assert_eq!(ix.data.len(), 67);
    assert_eq!(ix.data[0], 0);

    let ix = builder::initialize_mint2(&program_id, &mint, &authority, None, 6);
    assert_eq!(account_flags(&ix), vec![(mint, false, true)]);
    assert_eq!(ix.data.len(), 35);
    assert_eq!(ix.data[0], 18);
}

#[test]
fn initialize_account_variants() {
    let program_id = apl_token_sdk::id();
    let (account, mint, owner, rent) = (
        sample_pubkey(1),
        sample_pubkey(2),
        sample_pubkey(3),
        sample_pubkey(4),
    );

    let ix = builder::initialize_account(&program_id, &account, &mint, &owner);
    assert_eq!(
        account_flags(&ix),
        vec![(account, false, true), (mint, false, false), (owner, false, false)]
    );
    assert_eq!(ix.data, vec![1]);

    let ix = builder::initialize_account2(&program_id, &account, &mint, &owner, &rent);
    assert_eq!(
        account_flags(&ix),
        vec![(account, false, true), (mint, false, false), (rent, false, false)]
    );
    assert_eq!(ix.data.len(), 33);

    let ix = builder::initialize_account3(&program_id, &account, &mint, &owner);
    assert_eq!(
        account_flags(&ix),
        vec![(account, false, true), (mint, false, false)]
    );
    assert_eq!(&ix.data[1..], &owner.to_bytes()[..]);
}

#[test]
fn initialize_multisig_signers_do_not_sign() {
    let program_id = apl_token_sdk::id();
    let multisig = sample_pubkey(1);
    let (s1, s2, s3) = (sample_pubkey(2), sample_pubkey(3), sample_pubkey(4));

    let ix = builder::initialize_multisig(&program_id, &multisig, &[&s1, &s2, &s3], 2);
    assert_eq!(
        account_flags(&ix),
        vec![
            (multisig, false, true),
            (s1, false, false),
            (s2, false, false),
            (s3, false, false),
        ]
    );
    assert_eq!(ix.data, vec![2, 2]);
}

#[test]
fn set_authority_clears_with_none() {
    let program_id = apl_token_sdk::id();
    let (mint, current) = (sample_pubkey(1), sample_pubkey(2));

    let ix = builder::set_authority(
        &program_id,
        &mint,
        None,
        AuthorityType::MintTokens,
        &current,
        &[],
    );
    assert_eq!(
        account_flags(&ix),
        vec![(mint, false, true), (current, true, false)]
    );
    assert_eq!(
        TokenInstruction::unpack(&ix.data).unwrap(),
        TokenInstruction::SetAuthority(SetAuthority {
            authority_type: AuthorityType::MintTokens,
            new_authority: COption::None,
        })
    );
}

#[test]
fn authority_instructions_account_order() {
    let p = apl_token_sdk::id();
    let (a, b, c, d) = (
        sample_pubkey(1),
        sample_pubkey(2),
        sample_pubkey(3),
        sample_pubkey(4),
    );

    assert_eq!(
        account_flags(&builder::approve(&p, &a, &b, &c, &[], 5)),
        vec![(a, false, true), (b, false, false), (c, true, false)]
    );
    assert_eq!(
        account_flags(&builder::revoke(&p, &a, &b, &[])),
        vec![(a, false, true), (b, true, false)]
    );
    assert_eq!(
        account_flags(&builder::mint_to(&p, &a, &b, &c, &[], 5)),
        vec![(a, false, true), (b, false, true), (c, true, false)]
    );
    assert_eq!(
        account_flags(&builder::mint_to_checked(&p, &a, &b, &c, &[], 5, 2)),
        vec![(a, false, true), (b, false, true), (c, true, false)]
    );
    assert_eq!(
        account_flags(&builder::burn(&p, &a, &b, &c, &[], 5)),
        vec![(a, false, true), (b, false, true), (c, true, false)]
    );
    assert_eq!(
        account_flags(&builder::burn_checked(&p, &a, &b, &c, &[], 5, 2)),
        vec![(a, false, true), (b, false, true), (c, true, false)]
    );
    assert_eq!(
        account_flags(&builder::close_account(&p, &a, &b, &c, &[])),
        vec![(a, false, true), (b, false, true), (c, true, false)]
    );
    assert_eq!(
        account_flags(&builder::freeze_account(&p, &a, &b, &c, &[])),
        vec![(a, false, true), (b, false, false), (c, true, false)]
    );
    assert_eq!(
        account_flags(&builder::thaw_account(&p, &a, &b, &c, &[])),
        vec![(a, false, true), (b, false, false), (c, true, false)]
    );
    assert_eq!(
        account_flags(&builder::transfer_checked(&p, &a, &b, &c, &d, &[], 5, 2)),
        vec![
            (a, false, true),
            (b, false, false),
            (c, false, true),
            (d, true, false),
        ]
    );
    assert_eq!(
        account_flags(&builder::approve_checked(&p, &a, &b, &c, &d, &[], 5, 2)),
        vec![
            (a, false, true),
            (b, false, false),
            (c, false, false),
            (d, true, false),
        ]
    );
}

#[test]
fn mint_only_queries() {
    let p = apl_token_sdk::id();
    let mint = sample_pubkey(7);

    for ix in [
        builder::get_account_data_size(&p, &mint),
        builder::amount_to_ui_amount(&p, &mint, 1),
        builder::ui_amount_to_amount(&p, &mint, "0.25"),
    ] {
        assert_eq!(account_flags(&ix), vec![(mint, false, false)]);
    }

    let ix = builder::ui_amount_to_amount(&p, &mint, "0.25");
    assert_eq!(ix.data, b"\x160.25".to_vec());

    let account = sample_pubkey(8);
    let ix = builder::initialize_immutable_owner(&p, &account);
    assert_eq!(account_flags(&ix), vec![(account, false, true)]);
    assert_eq!(ix.data, vec![20]);
}

#[test]
fn program_id_is_ascii_tag() {
    assert_eq!(
        &apl_token_sdk::id().to_bytes(),
        b"AplToken111111111111111111111111"
    );
}
