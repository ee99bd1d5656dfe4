//! Decoders and buy-instruction builders for NFT marketplace escrows.
//!
//! Two escrow programs are supported, each with its own fixed account layout
//! and buy ABI: Magic Eden (v1) and Solsea. Decode an escrow account with
//! [`fetch_escrow`] or [`Marketplace::decode`], then build a transaction with
//! [`EscrowState::create_buy_transaction`].

pub mod codec;
pub mod config;
pub mod error;
pub mod instructions;
pub mod layout;
pub mod lookup;
pub mod magic_eden;
pub mod marketplace;
pub mod solsea;
pub mod state;
pub mod transaction;
pub mod utils;

pub use error::*;
pub use marketplace::*;
pub use state::*;
pub use transaction::BuyTransaction;

#[cfg(test)]
mod tests;
