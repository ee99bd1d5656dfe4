use std::collections::HashMap;

use solana_program::pubkey::Pubkey;
use solana_sdk::account::Account;

use crate::{
    config::{Deployments, MAGIC_EDEN_PROGRAM_ID, SOLSEA_PROGRAM_ID},
    encode, fetch_escrow,
    lookup::TokenMetadata,
    tests::{key, magic_eden_escrow, metadata, program_account, solsea_escrow, token_account},
    BuildError, BuyContext, DecodeError, EscrowState, Marketplace,
};

const MAGIC_EDEN_ESCROW: u8 = 0x61;
const SOLSEA_ESCROW: u8 = 0x62;
const MINT: u8 = 0x63;

fn ledger() -> HashMap<Pubkey, Account> {
    let magic_eden = magic_eden_escrow();
    HashMap::from([
        (
            key(MAGIC_EDEN_ESCROW),
            program_account(MAGIC_EDEN_PROGRAM_ID, encode(&magic_eden).unwrap()),
        ),
        (
            key(SOLSEA_ESCROW),
            program_account(SOLSEA_PROGRAM_ID, encode(&solsea_escrow()).unwrap()),
        ),
        (
            magic_eden.token_account,
            token_account(key(MINT), key(MAGIC_EDEN_ESCROW), spl_token::ID),
        ),
    ])
}

#[test]
fn marketplace_by_owner() {
    let deployments = Deployments::default();

    assert_eq!(
        Marketplace::from_program_id(&deployments, &MAGIC_EDEN_PROGRAM_ID),
        Some(Marketplace::MagicEden)
    );
    assert_eq!(
        Marketplace::from_program_id(&deployments, &SOLSEA_PROGRAM_ID),
        Some(Marketplace::Solsea)
    );
    assert_eq!(Marketplace::from_program_id(&deployments, &spl_token::ID), None);
    assert_eq!(Marketplace::Solsea.program_id(&deployments), SOLSEA_PROGRAM_ID);
}

#[test]
fn fetch_decodes_with_owner_layout() {
    let (ledger, deployments) = (ledger(), Deployments::default());

    let magic_eden = fetch_escrow(&ledger, &deployments, &key(MAGIC_EDEN_ESCROW)).unwrap();
    assert_eq!(magic_eden, EscrowState::MagicEden(magic_eden_escrow()));
    assert_eq!(magic_eden.marketplace(), Marketplace::MagicEden);
    assert_eq!(magic_eden.seller(), key(0x01));

    let solsea = fetch_escrow(&ledger, &deployments, &key(SOLSEA_ESCROW)).unwrap();
    assert_eq!(solsea, EscrowState::Solsea(solsea_escrow()));
    assert_eq!(solsea.price(), 1_000_000);
    assert_eq!(solsea.seller(), solsea_escrow().wallet);
    assert_eq!(solsea.token_account(), solsea_escrow().program_nft_account);
}

#[test]
fn fetch_failures() {
    let mut ledger = ledger();
    let deployments = Deployments::default();

    assert_eq!(
        fetch_escrow(&ledger, &deployments, &key(0x70)),
        Err(BuildError::MissingAccount(key(0x70)))
    );

    ledger.insert(key(0x71), program_account(key(0x72), vec![0; 80]));
    assert_eq!(
        fetch_escrow(&ledger, &deployments, &key(0x71)),
        Err(BuildError::UnknownProgram(key(0x72)))
    );

    // Solsea owner, Magic Eden sized record.
    ledger.insert(key(0x73), program_account(SOLSEA_PROGRAM_ID, vec![0; 80]));
    assert_eq!(
        fetch_escrow(&ledger, &deployments, &key(0x73)),
        Err(BuildError::Decode(DecodeError::LengthMismatch {
            layout: "solsea_escrow",
            expected: 474,
            actual: 80,
        }))
    );
}

#[test]
fn buy_routes_to_matching_builder() {
    let ledger = ledger();
    let deployments = Deployments::default();
    let metadata = HashMap::<Pubkey, TokenMetadata>::from([(key(MINT), metadata(&key(MINT), &[]))]);
    let ctx = BuyContext {
        deployments: &deployments,
        ledger: &ledger,
        metadata: &metadata,
    };
    let buyer = key(0x74);

    let escrow = fetch_escrow(&ledger, &deployments, &key(MAGIC_EDEN_ESCROW)).unwrap();
    let tx = escrow
        .create_buy_transaction(&ctx, &key(MAGIC_EDEN_ESCROW), &buyer, escrow.price())
        .unwrap();
    assert_eq!(tx.instructions().len(), 1);
    assert_eq!(tx.instructions()[0].program_id, MAGIC_EDEN_PROGRAM_ID);

    let escrow = fetch_escrow(&ledger, &deployments, &key(SOLSEA_ESCROW)).unwrap();
    let tx = escrow
        .create_buy_transaction(&ctx, &key(SOLSEA_ESCROW), &buyer, escrow.price())
        .unwrap();
    assert_eq!(tx.instructions().len(), 2);
    assert_eq!(tx.instructions()[1].program_id, SOLSEA_PROGRAM_ID);
}
