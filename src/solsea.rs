use solana_program::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
};
use spl_associated_token_account::{
    get_associated_token_address, instruction::create_associated_token_account_idempotent,
};
use tracing::{debug, warn};

use crate::{
    config::{PlatformFeeAccount, SolseaConfig},
    error::BuildError,
    instructions::SolseaBuy,
    state::{EscrowStatus, SolseaEscrow},
    transaction::BuyTransaction,
    utils::find_escrow_authority,
};

/// Rejects listings this crate cannot or should not buy.
fn check_listing(escrow: &Pubkey, state: &SolseaEscrow, max_price: u64) -> Result<(), BuildError> {
    if !state.is_native_currency() {
        warn!(%escrow, currency = %state.currency_mint, "rejecting non-SOL listing");
        return Err(BuildError::UnsupportedCurrency(state.currency_mint));
    }
    let status = state.status();
    if status != EscrowStatus::Listed {
        warn!(%escrow, ?status, "rejecting inactive listing");
        return Err(BuildError::NotListed(status));
    }
    if state.price > max_price {
        warn!(%escrow, price = state.price, max_price, "listing price above expected maximum");
        return Err(BuildError::PriceMismatch {
            expected: max_price,
            actual: state.price,
        });
    }
    Ok(())
}

/// Builds the Solsea `Buy` instruction.
///
/// Accounts, in the order the program reads them:
///
/// 0. `[writable]` Escrow account
/// 1. `[writable]` Escrow authority
/// 2. `[signer, writable]` Buyer
/// 3. `[writable]` Escrow authority, again
/// 4. `[signer, writable]` Source of funds, the buyer for SOL listings
/// 5. `[writable]` Seller wallet
/// 6. `[writable]` Buyer's NFT token account
/// 7. `[writable]` Platform fee account
/// 8. `[writable]` Program NFT token account
/// 9. `[writable]` Seller AART token account, system program when nothing is staked
/// 10. `[writable]` Program AART token account, likewise
/// 11. `[writable]` Stake authority, likewise
/// 12. `[writable]` Seller token account
/// 13. `[writable]` Platform staked AART token account, likewise
/// 14. `[]` Token program
/// 15. `[writable]` System program
/// 16.. `[writable]` Royalty recipients, `creator_count` of them
pub fn buy_instruction(
    config: &SolseaConfig,
    escrow: &Pubkey,
    state: &SolseaEscrow,
    buyer: &Pubkey,
    buyer_nft_account: &Pubkey,
    max_price: u64,
) -> Result<Instruction, BuildError> {
    check_listing(escrow, state, max_price)?;

    let (authority, _) = find_escrow_authority(escrow, &config.program_id)?;
    let platform_fee_account = match config.platform_fee {
        PlatformFeeAccount::Fixed(key) => key,
        PlatformFeeAccount::FromEscrowAuthority => state.authority_account,
    };
    // Only SOL listings get this far, so the buyer pays directly.
    let source = *buyer;
    // AART staking is not supported; the system program fills every staking slot.
    let unstaked = system_program::ID;

    let mut accounts = vec![
        AccountMeta::new(*escrow, false),
        AccountMeta::new(authority, false),
        AccountMeta::new(*buyer, true),
        AccountMeta::new(authority, false),
        AccountMeta::new(source, true),
        AccountMeta::new(state.wallet, false),
        AccountMeta::new(*buyer_nft_account, false),
        AccountMeta::new(platform_fee_account, false),
        AccountMeta::new(state.program_nft_account, false),
        AccountMeta::new(unstaked, false),
        AccountMeta::new(unstaked, false),
        AccountMeta::new(unstaked, false),
        AccountMeta::new(state.seller_token_account, false),
        AccountMeta::new(unstaked, false),
        AccountMeta::new_readonly(spl_token::ID, false),
        AccountMeta::new(system_program::ID, false),
    ];
    accounts.extend(
        state
            .active_creators()
            .iter()
            .map(|creator| AccountMeta::new(*creator, false)),
    );

    debug!(
        %escrow,
        accounts = ?accounts.iter().map(|meta| meta.pubkey).collect::<Vec<_>>(),
        "built Solsea buy instruction"
    );

    Ok(Instruction::new_with_bytes(
        config.program_id,
        bytemuck::bytes_of(&SolseaBuy::new(state.nonce)),
        accounts,
    ))
}

/// Buy transaction paid by `buyer`: make sure the buyer's associated token
/// account for the NFT exists, then buy into it.
pub fn create_buy_transaction(
    config: &SolseaConfig,
    escrow: &Pubkey,
    state: &SolseaEscrow,
    buyer: &Pubkey,
    max_price: u64,
) -> Result<BuyTransaction, BuildError> {
    let buyer_nft_account = get_associated_token_address(buyer, &state.mint);
    let buy = buy_instruction(config, escrow, state, buyer, &buyer_nft_account, max_price)?;

    // The buy writes into the associated account, so it must exist first.
    BuyTransaction::assemble(
        *buyer,
        vec![
            create_associated_token_account_idempotent(buyer, buyer, &state.mint, &spl_token::ID),
            buy,
        ],
    )
}
