use core::mem::{offset_of, size_of};

use crate::{
    layout::{FieldKind, MAGIC_EDEN_ESCROW, SOLSEA_ESCROW},
    MagicEdenEscrow,
};

#[test]
fn magic_eden_layout_matches_repr_c() {
    assert_eq!(MAGIC_EDEN_ESCROW.size(), size_of::<MagicEdenEscrow>());
    assert_eq!(
        MAGIC_EDEN_ESCROW.offset_of("selector"),
        Some(offset_of!(MagicEdenEscrow, selector))
    );
    assert_eq!(MAGIC_EDEN_ESCROW.offset_of("seller"), Some(offset_of!(MagicEdenEscrow, seller)));
    assert_eq!(
        MAGIC_EDEN_ESCROW.offset_of("token_account"),
        Some(offset_of!(MagicEdenEscrow, token_account))
    );
    assert_eq!(MAGIC_EDEN_ESCROW.offset_of("price"), Some(72));
}

#[test]
fn solsea_offsets() {
    let expected = [
        ("state", 0),
        ("nonce", 1),
        ("price", 2),
        ("stake_amount", 10),
        ("mint", 18),
        ("currency_mint", 146),
        ("authority_account", 178),
        ("creator_count", 210),
        ("seller_fee", 211),
        ("creator_percentage", 213),
        ("creators", 218),
        ("seller_token_account", 378),
        ("buyer", 410),
        ("program_stake_account", 442),
    ];
    for (name, offset) in expected {
        assert_eq!(SOLSEA_ESCROW.offset_of(name), Some(offset), "{name}");
    }
    assert_eq!(SOLSEA_ESCROW.size(), 474);
}

#[test]
fn creators_are_a_fixed_array() {
    let (_, creators) = SOLSEA_ESCROW.field("creators").unwrap();
    assert_eq!(creators.kind, FieldKind::PubkeyArray(5));
    assert_eq!(creators.kind.width(), 160);
}

#[test]
fn unknown_field() {
    assert_eq!(MAGIC_EDEN_ESCROW.field("mint"), None);
}
