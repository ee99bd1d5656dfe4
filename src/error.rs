use solana_program::pubkey::Pubkey;
use thiserror::Error;

use crate::state::EscrowStatus;

/// Failure to turn raw account bytes into a typed escrow state.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("{layout} expects {expected} bytes, got {actual}")]
    LengthMismatch {
        layout: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("read of {width} bytes at offset {offset} overruns buffer of {len} bytes")]
    OutOfRange {
        offset: usize,
        width: usize,
        len: usize,
    },
    #[error("creator count {count} exceeds capacity {capacity}")]
    CreatorCountOverflow { count: u8, capacity: usize },
}

/// Failure of an external collaborator (ledger read, metadata lookup).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("account {0} not found")]
    NotFound(Pubkey),
    #[error("{0}")]
    Failed(String),
}

/// Failure to build a buy instruction or transaction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("currency mint other than SOL not supported: {0}")]
    UnsupportedCurrency(Pubkey),
    #[error("{what} lookup failed: {reason}")]
    ExternalLookupFailed { what: &'static str, reason: String },
    #[error("escrow price {actual} exceeds expected maximum {expected}")]
    PriceMismatch { expected: u64, actual: u64 },
    #[error("account {0} is missing")]
    MissingAccount(Pubkey),
    #[error("escrow is not listed ({0:?})")]
    NotListed(EscrowStatus),
    #[error("a transaction needs at least one instruction")]
    EmptyTransaction,
    #[error("account owned by unknown program {0}")]
    UnknownProgram(Pubkey),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl BuildError {
    pub(crate) fn lookup(what: &'static str, error: LookupError) -> Self {
        match error {
            LookupError::NotFound(key) => BuildError::MissingAccount(key),
            LookupError::Failed(reason) => BuildError::ExternalLookupFailed { what, reason },
        }
    }
}
