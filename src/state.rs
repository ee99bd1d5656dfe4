use bytemuck::{Pod, Zeroable};
use solana_program::pubkey::Pubkey;
use tracing::trace;

use crate::{
    error::DecodeError,
    layout::{Layout, LayoutReader, LayoutWriter, MAGIC_EDEN_ESCROW, MAX_CREATORS, SOLSEA_ESCROW},
    marketplace::Marketplace,
};

/// A typed escrow record with a fixed on-chain layout.
pub trait EscrowLayout: Sized {
    const LAYOUT: &'static Layout;

    /// Reads every field of [`Self::LAYOUT`] in order.
    fn read(reader: &mut LayoutReader<'_>) -> Result<Self, DecodeError>;

    /// Writes every field of [`Self::LAYOUT`] in order.
    fn write(&self, writer: &mut LayoutWriter) -> Result<(), DecodeError>;

    /// Record-level invariants checked after all fields are read.
    fn validate(&self) -> Result<(), DecodeError> {
        Ok(())
    }
}

/// Decodes a whole account buffer. All or nothing: any length mismatch,
/// overrun or invariant violation fails without returning a partial state.
pub fn decode<T: EscrowLayout>(data: &[u8]) -> Result<T, DecodeError> {
    let expected = T::LAYOUT.size();
    if data.len() != expected {
        return Err(DecodeError::LengthMismatch {
            layout: T::LAYOUT.name,
            expected,
            actual: data.len(),
        });
    }

    let mut reader = LayoutReader::new(T::LAYOUT, data);
    let state = T::read(&mut reader)?;
    reader.finish()?;
    state.validate()?;

    trace!(layout = T::LAYOUT.name, "decoded escrow record");
    Ok(state)
}

pub fn encode<T: EscrowLayout>(state: &T) -> Result<Vec<u8>, DecodeError> {
    let mut writer = LayoutWriter::new(T::LAYOUT);
    state.write(&mut writer)?;
    writer.finish()
}

/// Magic Eden escrow account.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct MagicEdenEscrow {
    /// Account discriminator, opaque to us.
    pub selector: [u8; 8],
    pub seller: Pubkey,
    /// Token account holding the listed NFT.
    pub token_account: Pubkey,
    /// Lamports.
    pub price: u64,
}

impl EscrowLayout for MagicEdenEscrow {
    const LAYOUT: &'static Layout = &MAGIC_EDEN_ESCROW;

    fn read(reader: &mut LayoutReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            selector: reader.bytes()?,
            seller: reader.pubkey()?,
            token_account: reader.pubkey()?,
            price: reader.u64()?,
        })
    }

    fn write(&self, writer: &mut LayoutWriter) -> Result<(), DecodeError> {
        writer
            .bytes(&self.selector)?
            .pubkey(&self.seller)?
            .pubkey(&self.token_account)?
            .u64(self.price)?;
        Ok(())
    }
}

/// Listing status stored in the first byte of a Solsea escrow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EscrowStatus {
    Listed,
    Delisted,
    Bought,
    Unknown(u8),
}

impl From<u8> for EscrowStatus {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Listed,
            1 => Self::Delisted,
            2 => Self::Bought,
            other => Self::Unknown(other),
        }
    }
}

/// Solsea escrow account.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolseaEscrow {
    pub state: u8,
    /// Bump of the escrow authority, echoed in the buy payload.
    pub nonce: u8,
    /// Lamports.
    pub price: u64,
    pub stake_amount: u64,
    pub mint: Pubkey,
    pub seller_nft_account: Pubkey,
    /// Seller wallet, receives the sale proceeds.
    pub wallet: Pubkey,
    /// Program-owned token account holding the NFT while listed.
    pub program_nft_account: Pubkey,
    /// `Pubkey::default()` when the listing is priced in SOL.
    pub currency_mint: Pubkey,
    pub authority_account: Pubkey,
    pub creator_count: u8,
    pub seller_fee: u16,
    pub creator_percentage: [u8; MAX_CREATORS],
    /// Slots past `creator_count` are padding.
    pub creators: [Pubkey; MAX_CREATORS],
    pub seller_token_account: Pubkey,
    pub buyer: Pubkey,
    pub program_stake_account: Pubkey,
}

impl SolseaEscrow {
    pub fn status(&self) -> EscrowStatus {
        EscrowStatus::from(self.state)
    }

    pub fn is_native_currency(&self) -> bool {
        self.currency_mint == Pubkey::default()
    }

    /// Creators actually recorded on the listing.
    pub fn active_creators(&self) -> &[Pubkey] {
        let count = usize::from(self.creator_count).min(MAX_CREATORS);
        &self.creators[..count]
    }

    /// Royalty shares paired with [`Self::active_creators`].
    pub fn active_creator_shares(&self) -> &[u8] {
        let count = usize::from(self.creator_count).min(MAX_CREATORS);
        &self.creator_percentage[..count]
    }
}

impl EscrowLayout for SolseaEscrow {
    const LAYOUT: &'static Layout = &SOLSEA_ESCROW;

    fn read(reader: &mut LayoutReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            state: reader.u8()?,
            nonce: reader.u8()?,
            price: reader.u64()?,
            stake_amount: reader.u64()?,
            mint: reader.pubkey()?,
            seller_nft_account: reader.pubkey()?,
            wallet: reader.pubkey()?,
            program_nft_account: reader.pubkey()?,
            currency_mint: reader.pubkey()?,
            authority_account: reader.pubkey()?,
            creator_count: reader.u8()?,
            seller_fee: reader.u16()?,
            creator_percentage: reader.bytes()?,
            creators: reader.pubkeys()?,
            seller_token_account: reader.pubkey()?,
            buyer: reader.pubkey()?,
            program_stake_account: reader.pubkey()?,
        })
    }

    fn write(&self, writer: &mut LayoutWriter) -> Result<(), DecodeError> {
        writer
            .u8(self.state)?
            .u8(self.nonce)?
            .u64(self.price)?
            .u64(self.stake_amount)?
            .pubkey(&self.mint)?
            .pubkey(&self.seller_nft_account)?
            .pubkey(&self.wallet)?
            .pubkey(&self.program_nft_account)?
            .pubkey(&self.currency_mint)?
            .pubkey(&self.authority_account)?
            .u8(self.creator_count)?
            .u16(self.seller_fee)?
            .bytes(&self.creator_percentage)?
            .pubkeys(&self.creators)?
            .pubkey(&self.seller_token_account)?
            .pubkey(&self.buyer)?
            .pubkey(&self.program_stake_account)?;
        Ok(())
    }

    fn validate(&self) -> Result<(), DecodeError> {
        if usize::from(self.creator_count) > MAX_CREATORS {
            return Err(DecodeError::CreatorCountOverflow {
                count: self.creator_count,
                capacity: MAX_CREATORS,
            });
        }
        Ok(())
    }
}

/// Decoded escrow of one of the supported marketplaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EscrowState {
    MagicEden(MagicEdenEscrow),
    Solsea(SolseaEscrow),
}

impl EscrowState {
    pub fn marketplace(&self) -> Marketplace {
        match self {
            EscrowState::MagicEden(_) => Marketplace::MagicEden,
            EscrowState::Solsea(_) => Marketplace::Solsea,
        }
    }

    pub fn price(&self) -> u64 {
        match self {
            EscrowState::MagicEden(escrow) => escrow.price,
            EscrowState::Solsea(escrow) => escrow.price,
        }
    }

    /// Wallet that receives the proceeds.
    pub fn seller(&self) -> Pubkey {
        match self {
            EscrowState::MagicEden(escrow) => escrow.seller,
            EscrowState::Solsea(escrow) => escrow.wallet,
        }
    }

    /// Token account currently holding the listed asset.
    pub fn token_account(&self) -> Pubkey {
        match self {
            EscrowState::MagicEden(escrow) => escrow.token_account,
            EscrowState::Solsea(escrow) => escrow.program_nft_account,
        }
    }
}
