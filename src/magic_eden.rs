use solana_program::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
};
use tracing::{debug, warn};

use crate::{
    config::MagicEdenConfig,
    error::BuildError,
    instructions::MagicEdenBuy,
    lookup::{read_token_account, LedgerReader, MetadataSource, TokenMetadata},
    state::MagicEdenEscrow,
    transaction::BuyTransaction,
    utils::find_metadata_address,
};

fn check_price(escrow: &Pubkey, state: &MagicEdenEscrow, max_price: u64) -> Result<(), BuildError> {
    if state.price > max_price {
        warn!(%escrow, price = state.price, max_price, "listing price above expected maximum");
        return Err(BuildError::PriceMismatch {
            expected: max_price,
            actual: state.price,
        });
    }
    Ok(())
}

/// Builds the Magic Eden `Buy` instruction.
///
/// Accounts:
///
/// 0. `[signer, writable]` Buyer
/// 1. `[writable]` Escrowed NFT token account
/// 2. `[writable]` Seller
/// 3. `[writable]` Escrow account
/// 4. `[]` Marketplace authority
/// 5. `[]` System program
/// 6. `[]` Token program
/// 7. `[writable]` Platform fee account
/// 8. `[]` NFT metadata account
/// 9.. `[writable]` Royalty recipients, in metadata order
///
/// The payload carries the escrow price, so the program settles at the
/// price read here. `max_price` bounds it.
pub fn buy_instruction(
    config: &MagicEdenConfig,
    escrow: &Pubkey,
    state: &MagicEdenEscrow,
    mint: &Pubkey,
    metadata: &TokenMetadata,
    buyer: &Pubkey,
    max_price: u64,
) -> Result<Instruction, BuildError> {
    check_price(escrow, state, max_price)?;

    let mut accounts = Vec::with_capacity(9 + metadata.creators.len());
    accounts.extend([
        AccountMeta::new(*buyer, true),
        AccountMeta::new(state.token_account, false),
        AccountMeta::new(state.seller, false),
        AccountMeta::new(*escrow, false),
        AccountMeta::new_readonly(config.authority, false),
        AccountMeta::new_readonly(system_program::ID, false),
        AccountMeta::new_readonly(spl_token::ID, false),
        AccountMeta::new(config.platform_fee_account, false),
        AccountMeta::new_readonly(metadata.address, false),
    ]);
    accounts.extend(
        metadata
            .creators
            .iter()
            .map(|creator| AccountMeta::new(creator.address, false)),
    );

    debug!(
        %escrow,
        %mint,
        accounts = ?accounts.iter().map(|meta| meta.pubkey).collect::<Vec<_>>(),
        "built Magic Eden buy instruction"
    );

    Ok(Instruction::new_with_bytes(
        config.program_id,
        bytemuck::bytes_of(&MagicEdenBuy::new(config.buy_selector, state.price, *mint)),
        accounts,
    ))
}

/// Resolves the NFT mint and its creators, then builds a single-instruction
/// buy transaction paid by `buyer`.
pub fn create_buy_transaction<L, M>(
    config: &MagicEdenConfig,
    ledger: &L,
    metadata_source: &M,
    escrow: &Pubkey,
    state: &MagicEdenEscrow,
    buyer: &Pubkey,
    max_price: u64,
) -> Result<BuyTransaction, BuildError>
where
    L: LedgerReader + ?Sized,
    M: MetadataSource + ?Sized,
{
    check_price(escrow, state, max_price)?;

    let token_account = read_token_account(ledger, &state.token_account)?;
    // The v1 program transfers through legacy SPL Token only.
    if token_account.token_program != spl_token::ID {
        warn!(
            %escrow,
            token_program = %token_account.token_program,
            "escrowed NFT is not held by SPL Token"
        );
        return Err(BuildError::ExternalLookupFailed {
            what: "token account",
            reason: format!(
                "{} is owned by {}, not {}",
                state.token_account,
                token_account.token_program,
                spl_token::ID
            ),
        });
    }
    let mint = token_account.mint;

    let metadata = metadata_source
        .metadata_by_mint(&mint)
        .map_err(|e| BuildError::lookup("metadata", e))?;

    let expected = find_metadata_address(&mint)?;
    if metadata.address != expected {
        return Err(BuildError::ExternalLookupFailed {
            what: "metadata",
            reason: format!("metadata account {} is not {expected}", metadata.address),
        });
    }

    let buy = buy_instruction(config, escrow, state, &mint, &metadata, buyer, max_price)?;
    BuyTransaction::assemble(*buyer, vec![buy])
}
