use bytemuck::{Pod, Zeroable};
use solana_program::pubkey::Pubkey;

/// Tag of the Solsea escrow `Buy` instruction.
pub const SOLSEA_BUY_TAG: u8 = 2;

/// Solsea buy payload: `[tag, nonce]`.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct SolseaBuy {
    pub tag: u8,
    pub nonce: u8,
}

impl SolseaBuy {
    pub fn new(nonce: u8) -> Self {
        Self {
            tag: SOLSEA_BUY_TAG,
            nonce,
        }
    }
}

/// Magic Eden buy payload: `selector ‖ price ‖ mint`, 48 bytes.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct MagicEdenBuy {
    pub selector: [u8; 8],
    /// Little-endian lamports.
    pub price: [u8; 8],
    pub mint: Pubkey,
}

impl MagicEdenBuy {
    pub const LEN: usize = core::mem::size_of::<Self>();

    pub fn new(selector: [u8; 8], price: u64, mint: Pubkey) -> Self {
        Self {
            selector,
            price: price.to_le_bytes(),
            mint,
        }
    }

    pub fn price(&self) -> u64 {
        u64::from_le_bytes(self.price)
    }
}

const _: () = assert!(MagicEdenBuy::LEN == 48);
const _: () = assert!(core::mem::size_of::<SolseaBuy>() == 2);
