use solana_program::pubkey::Pubkey;

use crate::{config::TOKEN_METADATA_PROGRAM_ID, error::BuildError};

#[inline]
pub fn find_program_derived_address(
    seeds: &[&[u8]],
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), BuildError> {
    Pubkey::try_find_program_address(seeds, program_id).ok_or_else(|| {
        BuildError::ExternalLookupFailed {
            what: "program derived address",
            reason: format!("no off-curve address for program {program_id}"),
        }
    })
}

/// Authority a Solsea escrow signs with, seeded by the escrow address alone.
#[inline]
pub fn find_escrow_authority(
    escrow: &Pubkey,
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), BuildError> {
    find_program_derived_address(&[escrow.as_ref()], program_id)
}

/// Metaplex metadata account of `mint`.
#[inline]
pub fn find_metadata_address(mint: &Pubkey) -> Result<Pubkey, BuildError> {
    find_program_derived_address(
        &[b"metadata", TOKEN_METADATA_PROGRAM_ID.as_ref(), mint.as_ref()],
        &TOKEN_METADATA_PROGRAM_ID,
    )
    .map(|(address, _)| address)
}
