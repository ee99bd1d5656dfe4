//! Deployment constants of the supported marketplaces.
//!
//! None of these are published by the marketplaces. They were read off
//! mainnet transactions and may change if a program is redeployed.

use solana_program::{pubkey, pubkey::Pubkey};

/// Magic Eden v1 escrow program.
pub const MAGIC_EDEN_PROGRAM_ID: Pubkey = pubkey!("MEisE1HzehtrDpAAT8PnLHjpSSkRYakotTuJRPjTpo8");

/// Read-only account passed at index 4 of every observed Magic Eden buy.
/// Looks like a program authority; its role is not documented.
pub const MAGIC_EDEN_AUTHORITY: Pubkey = pubkey!("GUfCR9mK6azb9vcpsxgXyj7XRPAKJd4KMHTTVvtncGgp");

/// Magic Eden fee receiver, seen at index 7 of observed buys.
pub const MAGIC_EDEN_PLATFORM_FEE_ACCOUNT: Pubkey =
    pubkey!("2NZukH2TXpcuZP4htiuT8CFxcaQSWzkkR6kepSWnZ24Q");

/// First eight bytes of observed Magic Eden buy payloads.
pub const MAGIC_EDEN_BUY_SELECTOR: [u8; 8] = [0x43, 0x8e, 0x36, 0xd8, 0x1f, 0x1d, 0x1b, 0x5c];

/// Solsea escrow program (escrow3, staking revision).
pub const SOLSEA_PROGRAM_ID: Pubkey = pubkey!("617jbWo616ggkDxvW1Le8pV38XLbVSyWY8ae6QUmGBAU");

/// Solsea fee receiver. The program's own account docs point at the escrow's
/// `authority_account`, but buys built that way fail on mainnet while this
/// key succeeds.
pub const SOLSEA_PLATFORM_FEE_ACCOUNT: Pubkey =
    pubkey!("6T4f5bdrd9ffTtehqAj9BGyxahysRGcaUZeDzA1XN52N");

/// Metaplex token metadata program.
pub const TOKEN_METADATA_PROGRAM_ID: Pubkey =
    pubkey!("metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bBuxe5mh");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MagicEdenConfig {
    pub program_id: Pubkey,
    pub authority: Pubkey,
    pub platform_fee_account: Pubkey,
    pub buy_selector: [u8; 8],
}

impl Default for MagicEdenConfig {
    fn default() -> Self {
        Self {
            program_id: MAGIC_EDEN_PROGRAM_ID,
            authority: MAGIC_EDEN_AUTHORITY,
            platform_fee_account: MAGIC_EDEN_PLATFORM_FEE_ACCOUNT,
            buy_selector: MAGIC_EDEN_BUY_SELECTOR,
        }
    }
}

/// Where the Solsea platform fee account comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlatformFeeAccount {
    Fixed(Pubkey),
    /// Use the escrow's recorded `authority_account`.
    FromEscrowAuthority,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolseaConfig {
    pub program_id: Pubkey,
    pub platform_fee: PlatformFeeAccount,
}

impl Default for SolseaConfig {
    fn default() -> Self {
        Self {
            program_id: SOLSEA_PROGRAM_ID,
            platform_fee: PlatformFeeAccount::Fixed(SOLSEA_PLATFORM_FEE_ACCOUNT),
        }
    }
}

/// Every supported marketplace deployment, used to route accounts by owner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Deployments {
    pub magic_eden: MagicEdenConfig,
    pub solsea: SolseaConfig,
}
