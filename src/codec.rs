//! Fixed-width little-endian field codec.
//!
//! Every read and write is bounds-checked against the buffer and fails with
//! [`DecodeError::OutOfRange`] instead of panicking.

use solana_program::pubkey::{Pubkey, PUBKEY_BYTES};

use crate::error::DecodeError;

#[inline]
fn span(len: usize, offset: usize, width: usize) -> Result<core::ops::Range<usize>, DecodeError> {
    match offset.checked_add(width) {
        Some(end) if end <= len => Ok(offset..end),
        _ => Err(DecodeError::OutOfRange { offset, width, len }),
    }
}

#[inline]
fn read_array<const N: usize>(buf: &[u8], offset: usize) -> Result<[u8; N], DecodeError> {
    let range = span(buf.len(), offset, N)?;
    buf.get(range)
        .and_then(|slice| slice.try_into().ok())
        .ok_or(DecodeError::OutOfRange { offset, width: N, len: buf.len() })
}

#[inline]
fn write_slice(buf: &mut [u8], offset: usize, bytes: &[u8]) -> Result<(), DecodeError> {
    let range = span(buf.len(), offset, bytes.len())?;
    buf[range].copy_from_slice(bytes);
    Ok(())
}

#[inline]
pub fn read_u8(buf: &[u8], offset: usize) -> Result<u8, DecodeError> {
    read_array::<1>(buf, offset).map(|[b]| b)
}

#[inline]
pub fn read_u16(buf: &[u8], offset: usize) -> Result<u16, DecodeError> {
    read_array(buf, offset).map(u16::from_le_bytes)
}

#[inline]
pub fn read_u32(buf: &[u8], offset: usize) -> Result<u32, DecodeError> {
    read_array(buf, offset).map(u32::from_le_bytes)
}

#[inline]
pub fn read_u64(buf: &[u8], offset: usize) -> Result<u64, DecodeError> {
    read_array(buf, offset).map(u64::from_le_bytes)
}

#[inline]
pub fn read_bytes<const N: usize>(buf: &[u8], offset: usize) -> Result<[u8; N], DecodeError> {
    read_array(buf, offset)
}

#[inline]
pub fn read_pubkey(buf: &[u8], offset: usize) -> Result<Pubkey, DecodeError> {
    read_array::<PUBKEY_BYTES>(buf, offset).map(Pubkey::new_from_array)
}

#[inline]
pub fn write_u8(buf: &mut [u8], offset: usize, value: u8) -> Result<(), DecodeError> {
    write_slice(buf, offset, &[value])
}

#[inline]
pub fn write_u16(buf: &mut [u8], offset: usize, value: u16) -> Result<(), DecodeError> {
    write_slice(buf, offset, &value.to_le_bytes())
}

#[inline]
pub fn write_u32(buf: &mut [u8], offset: usize, value: u32) -> Result<(), DecodeError> {
    write_slice(buf, offset, &value.to_le_bytes())
}

#[inline]
pub fn write_u64(buf: &mut [u8], offset: usize, value: u64) -> Result<(), DecodeError> {
    write_slice(buf, offset, &value.to_le_bytes())
}

#[inline]
pub fn write_bytes(buf: &mut [u8], offset: usize, bytes: &[u8]) -> Result<(), DecodeError> {
    write_slice(buf, offset, bytes)
}

#[inline]
pub fn write_pubkey(buf: &mut [u8], offset: usize, value: &Pubkey) -> Result<(), DecodeError> {
    write_slice(buf, offset, value.as_ref())
}

/// `u32` length-prefixed sequences of identifiers.
///
/// Not used by any escrow layout: both marketplaces store creators in fixed
/// five-slot arrays. Kept apart so it cannot be applied to a fixed record.
#[cfg(feature = "length-prefixed")]
pub mod length_prefixed {
    use super::*;

    /// Reads `len: u32` followed by `len` identifiers. Returns the identifiers
    /// and the number of bytes consumed.
    pub fn read_pubkeys(buf: &[u8], offset: usize) -> Result<(Vec<Pubkey>, usize), DecodeError> {
        let count = read_u32(buf, offset)? as usize;
        let body = offset + 4;
        let width = count
            .checked_mul(PUBKEY_BYTES)
            .ok_or(DecodeError::OutOfRange {
                offset: body,
                width: usize::MAX,
                len: buf.len(),
            })?;
        span(buf.len(), body, width)?;
        let keys = (0..count)
            .map(|i| read_pubkey(buf, body + i * PUBKEY_BYTES))
            .collect::<Result<Vec<_>, _>>()?;
        Ok((keys, 4 + width))
    }

    pub fn write_pubkeys(
        buf: &mut [u8],
        offset: usize,
        keys: &[Pubkey],
    ) -> Result<usize, DecodeError> {
        let count = u32::try_from(keys.len())
            .map_err(|_| DecodeError::OutOfRange {
                offset,
                width: usize::MAX,
                len: buf.len(),
            })?;
        span(buf.len(), offset, 4 + keys.len() * PUBKEY_BYTES)?;
        write_u32(buf, offset, count)?;
        for (i, key) in keys.iter().enumerate() {
            write_pubkey(buf, offset + 4 + i * PUBKEY_BYTES, key)?;
        }
        Ok(4 + keys.len() * PUBKEY_BYTES)
    }
}
