use solana_program::pubkey::Pubkey;
use tracing::debug;

use crate::{
    config::Deployments,
    error::{BuildError, DecodeError},
    lookup::{LedgerReader, MetadataSource},
    magic_eden, solsea,
    state::{decode, EscrowState},
    transaction::BuyTransaction,
};

/// Supported escrow programs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marketplace {
    MagicEden,
    Solsea,
}

impl Marketplace {
    /// Picks the marketplace whose program owns an escrow account.
    pub fn from_program_id(deployments: &Deployments, program_id: &Pubkey) -> Option<Self> {
        if *program_id == deployments.magic_eden.program_id {
            Some(Self::MagicEden)
        } else if *program_id == deployments.solsea.program_id {
            Some(Self::Solsea)
        } else {
            None
        }
    }

    pub fn program_id(&self, deployments: &Deployments) -> Pubkey {
        match self {
            Self::MagicEden => deployments.magic_eden.program_id,
            Self::Solsea => deployments.solsea.program_id,
        }
    }

    pub fn decode(&self, data: &[u8]) -> Result<EscrowState, DecodeError> {
        match self {
            Self::MagicEden => decode(data).map(EscrowState::MagicEden),
            Self::Solsea => decode(data).map(EscrowState::Solsea),
        }
    }
}

/// Reads an escrow account and decodes it with the layout of its owner.
pub fn fetch_escrow<L: LedgerReader + ?Sized>(
    ledger: &L,
    deployments: &Deployments,
    address: &Pubkey,
) -> Result<EscrowState, BuildError> {
    let account = ledger
        .get_account(address)
        .map_err(|e| BuildError::lookup("escrow account", e))?;
    let marketplace = Marketplace::from_program_id(deployments, &account.owner)
        .ok_or(BuildError::UnknownProgram(account.owner))?;

    debug!(%address, ?marketplace, "decoding escrow");
    Ok(marketplace.decode(&account.data)?)
}

/// Everything a buy may need to consult besides the escrow itself.
pub struct BuyContext<'a, L: ?Sized, M: ?Sized> {
    pub deployments: &'a Deployments,
    pub ledger: &'a L,
    pub metadata: &'a M,
}

impl EscrowState {
    /// Builds the buy transaction with the builder matching this escrow.
    pub fn create_buy_transaction<L, M>(
        &self,
        ctx: &BuyContext<'_, L, M>,
        escrow: &Pubkey,
        buyer: &Pubkey,
        max_price: u64,
    ) -> Result<BuyTransaction, BuildError>
    where
        L: LedgerReader + ?Sized,
        M: MetadataSource + ?Sized,
    {
        match self {
            EscrowState::MagicEden(state) => magic_eden::create_buy_transaction(
                &ctx.deployments.magic_eden,
                ctx.ledger,
                ctx.metadata,
                escrow,
                state,
                buyer,
                max_price,
            ),
            EscrowState::Solsea(state) => solsea::create_buy_transaction(
                &ctx.deployments.solsea,
                escrow,
                state,
                buyer,
                max_price,
            ),
        }
    }
}
