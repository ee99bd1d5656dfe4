use solana_program::{program_option::COption, program_pack::Pack, pubkey::Pubkey};
use solana_sdk::account::Account;
use spl_token::state::AccountState;

use crate::{
    lookup::{Creator, TokenMetadata},
    utils::find_metadata_address,
    MagicEdenEscrow, SolseaEscrow,
};

mod layout;
mod marketplace;
mod transaction;

pub(crate) fn key(byte: u8) -> Pubkey {
    Pubkey::new_from_array([byte; 32])
}

pub(crate) fn magic_eden_escrow() -> MagicEdenEscrow {
    MagicEdenEscrow {
        selector: [0xd1, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08],
        seller: key(0x01),
        token_account: key(0x02),
        price: 1_000_000,
    }
}

pub(crate) fn solsea_escrow() -> SolseaEscrow {
    SolseaEscrow {
        state: 0,
        nonce: 7,
        price: 1_000_000,
        stake_amount: 0,
        mint: key(0x11),
        seller_nft_account: key(0x12),
        wallet: key(0x13),
        program_nft_account: key(0x14),
        currency_mint: Pubkey::default(),
        authority_account: key(0x15),
        creator_count: 2,
        seller_fee: 500,
        creator_percentage: [60, 40, 0, 0, 0],
        creators: [key(0x21), key(0x22), key(0x23), key(0x24), key(0x25)],
        seller_token_account: key(0x16),
        buyer: Pubkey::default(),
        program_stake_account: Pubkey::default(),
    }
}

/// Initialized token account holding one `mint`, owned by `token_program`.
pub(crate) fn token_account(mint: Pubkey, owner: Pubkey, token_program: Pubkey) -> Account {
    let mut data = vec![0; spl_token::state::Account::LEN];
    Pack::pack(
        spl_token::state::Account {
            mint,
            owner,
            amount: 1,
            delegate: COption::None,
            state: AccountState::Initialized,
            is_native: COption::None,
            delegated_amount: 0,
            close_authority: COption::None,
        },
        &mut data,
    )
    .unwrap();
    Account {
        lamports: 2_039_280,
        data,
        owner: token_program,
        executable: false,
        rent_epoch: 0,
    }
}

pub(crate) fn program_account(owner: Pubkey, data: Vec<u8>) -> Account {
    Account {
        lamports: 1_000_000_000,
        data,
        owner,
        executable: false,
        rent_epoch: 0,
    }
}

pub(crate) fn metadata(mint: &Pubkey, creators: &[(Pubkey, u8)]) -> TokenMetadata {
    TokenMetadata {
        address: find_metadata_address(mint).unwrap(),
        creators: creators
            .iter()
            .map(|&(address, share)| Creator { address, share })
            .collect(),
    }
}
