//! Interfaces to the outside world needed while building a buy.
//!
//! The crate never talks to an RPC node itself. Callers plug in whatever
//! ledger access they have; the `HashMap` impls serve tests and snapshots.

use std::collections::HashMap;

use solana_program::pubkey::Pubkey;
use solana_sdk::account::Account;
use spl_token_2022::{extension::StateWithExtensions, state::Account as TokenAccount};

use crate::error::{BuildError, LookupError};

/// Read access to on-chain accounts.
pub trait LedgerReader {
    fn get_account(&self, address: &Pubkey) -> Result<Account, LookupError>;
}

impl<T: LedgerReader + ?Sized> LedgerReader for &T {
    fn get_account(&self, address: &Pubkey) -> Result<Account, LookupError> {
        (**self).get_account(address)
    }
}

impl LedgerReader for HashMap<Pubkey, Account> {
    fn get_account(&self, address: &Pubkey) -> Result<Account, LookupError> {
        self.get(address)
            .cloned()
            .ok_or(LookupError::NotFound(*address))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Creator {
    pub address: Pubkey,
    /// Percentage of royalties.
    pub share: u8,
}

/// The parts of an NFT's metadata a buy needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenMetadata {
    /// Metadata account address.
    pub address: Pubkey,
    /// Royalty recipients in metadata order.
    pub creators: Vec<Creator>,
}

/// Metadata lookup keyed by mint.
pub trait MetadataSource {
    fn metadata_by_mint(&self, mint: &Pubkey) -> Result<TokenMetadata, LookupError>;
}

impl<T: MetadataSource + ?Sized> MetadataSource for &T {
    fn metadata_by_mint(&self, mint: &Pubkey) -> Result<TokenMetadata, LookupError> {
        (**self).metadata_by_mint(mint)
    }
}

impl MetadataSource for HashMap<Pubkey, TokenMetadata> {
    fn metadata_by_mint(&self, mint: &Pubkey) -> Result<TokenMetadata, LookupError> {
        self.get(mint)
            .cloned()
            .ok_or_else(|| LookupError::Failed(format!("no metadata for mint {mint}")))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenAccountInfo {
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    /// SPL Token or Token-2022.
    pub token_program: Pubkey,
}

/// Reads an SPL Token or Token-2022 account.
pub fn read_token_account<L: LedgerReader + ?Sized>(
    ledger: &L,
    address: &Pubkey,
) -> Result<TokenAccountInfo, BuildError> {
    let account = ledger
        .get_account(address)
        .map_err(|e| BuildError::lookup("token account", e))?;

    if account.owner != spl_token::ID && account.owner != spl_token_2022::ID {
        return Err(BuildError::ExternalLookupFailed {
            what: "token account",
            reason: format!("{address} is owned by {}, not a token program", account.owner),
        });
    }

    let token = StateWithExtensions::<TokenAccount>::unpack(&account.data).map_err(|e| {
        BuildError::ExternalLookupFailed {
            what: "token account",
            reason: format!("{address}: {e}"),
        }
    })?;

    Ok(TokenAccountInfo {
        mint: token.base.mint,
        owner: token.base.owner,
        amount: token.base.amount,
        token_program: account.owner,
    })
}
