//! Static byte layouts of the escrow accounts.
//!
//! Fields are listed in on-chain byte order. There are no implicit gaps and
//! no length prefixes: every layout has a width known at compile time.

use solana_program::pubkey::{Pubkey, PUBKEY_BYTES};

use crate::{codec, error::DecodeError};

/// Creator slots in a Solsea escrow record.
pub const MAX_CREATORS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    U8,
    U16,
    U32,
    U64,
    Pubkey,
    /// Opaque bytes, e.g. a discriminator or a percentage table.
    Bytes(usize),
    PubkeyArray(usize),
}

impl FieldKind {
    pub const fn width(&self) -> usize {
        match self {
            FieldKind::U8 => 1,
            FieldKind::U16 => 2,
            FieldKind::U32 => 4,
            FieldKind::U64 => 8,
            FieldKind::Pubkey => PUBKEY_BYTES,
            FieldKind::Bytes(n) => *n,
            FieldKind::PubkeyArray(n) => *n * PUBKEY_BYTES,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
}

const fn field(name: &'static str, kind: FieldKind) -> Field {
    Field { name, kind }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub name: &'static str,
    pub fields: &'static [Field],
}

impl Layout {
    /// Total width in bytes.
    pub const fn size(&self) -> usize {
        let mut total = 0;
        let mut i = 0;
        while i < self.fields.len() {
            total += self.fields[i].kind.width();
            i += 1;
        }
        total
    }

    /// Offset and description of the named field.
    pub fn field(&self, name: &str) -> Option<(usize, Field)> {
        let mut offset = 0;
        for field in self.fields {
            if field.name == name {
                return Some((offset, *field));
            }
            offset += field.kind.width();
        }
        None
    }

    pub fn offset_of(&self, name: &str) -> Option<usize> {
        self.field(name).map(|(offset, _)| offset)
    }
}

/// Magic Eden escrow, 80 bytes.
pub const MAGIC_EDEN_ESCROW: Layout = Layout {
    name: "magic_eden_escrow",
    fields: &[
        field("selector", FieldKind::Bytes(8)),
        field("seller", FieldKind::Pubkey),
        field("token_account", FieldKind::Pubkey),
        field("price", FieldKind::U64),
    ],
};

/// Solsea escrow (staking revision), 474 bytes.
pub const SOLSEA_ESCROW: Layout = Layout {
    name: "solsea_escrow",
    fields: &[
        field("state", FieldKind::U8),
        field("nonce", FieldKind::U8),
        field("price", FieldKind::U64),
        field("stake_amount", FieldKind::U64),
        field("mint", FieldKind::Pubkey),
        field("seller_nft_account", FieldKind::Pubkey),
        field("wallet", FieldKind::Pubkey),
        field("program_nft_account", FieldKind::Pubkey),
        field("currency_mint", FieldKind::Pubkey),
        field("authority_account", FieldKind::Pubkey),
        field("creator_count", FieldKind::U8),
        field("seller_fee", FieldKind::U16),
        field("creator_percentage", FieldKind::Bytes(MAX_CREATORS)),
        field("creators", FieldKind::PubkeyArray(MAX_CREATORS)),
        field("seller_token_account", FieldKind::Pubkey),
        field("buyer", FieldKind::Pubkey),
        field("program_stake_account", FieldKind::Pubkey),
    ],
};

const _: () = assert!(MAGIC_EDEN_ESCROW.size() == 80);
const _: () = assert!(SOLSEA_ESCROW.size() == 474);

/// Sequential reader that walks a [`Layout`] field by field.
///
/// Each read must match the kind of the next declared field; reading out of
/// order is a programming error and trips a debug assertion.
pub struct LayoutReader<'a> {
    layout: &'static Layout,
    data: &'a [u8],
    index: usize,
    pos: usize,
}

impl<'a> LayoutReader<'a> {
    pub fn new(layout: &'static Layout, data: &'a [u8]) -> Self {
        Self {
            layout,
            data,
            index: 0,
            pos: 0,
        }
    }

    fn next(&mut self, kind: FieldKind) -> usize {
        debug_assert_eq!(
            self.layout.fields.get(self.index).map(|f| f.kind),
            Some(kind),
            "{}: field #{} read with the wrong kind",
            self.layout.name,
            self.index
        );
        let offset = self.pos;
        self.pos += kind.width();
        self.index += 1;
        offset
    }

    pub fn u8(&mut self) -> Result<u8, DecodeError> {
        let offset = self.next(FieldKind::U8);
        codec::read_u8(self.data, offset)
    }

    pub fn u16(&mut self) -> Result<u16, DecodeError> {
        let offset = self.next(FieldKind::U16);
        codec::read_u16(self.data, offset)
    }

    pub fn u32(&mut self) -> Result<u32, DecodeError> {
        let offset = self.next(FieldKind::U32);
        codec::read_u32(self.data, offset)
    }

    pub fn u64(&mut self) -> Result<u64, DecodeError> {
        let offset = self.next(FieldKind::U64);
        codec::read_u64(self.data, offset)
    }

    pub fn bytes<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let offset = self.next(FieldKind::Bytes(N));
        codec::read_bytes(self.data, offset)
    }

    pub fn pubkey(&mut self) -> Result<Pubkey, DecodeError> {
        let offset = self.next(FieldKind::Pubkey);
        codec::read_pubkey(self.data, offset)
    }

    pub fn pubkeys<const N: usize>(&mut self) -> Result<[Pubkey; N], DecodeError> {
        let offset = self.next(FieldKind::PubkeyArray(N));
        let mut keys = [Pubkey::default(); N];
        for (i, key) in keys.iter_mut().enumerate() {
            *key = codec::read_pubkey(self.data, offset + i * PUBKEY_BYTES)?;
        }
        Ok(keys)
    }

    /// Succeeds only if every declared field was consumed.
    pub fn finish(self) -> Result<(), DecodeError> {
        if self.index != self.layout.fields.len() || self.pos != self.data.len() {
            return Err(DecodeError::LengthMismatch {
                layout: self.layout.name,
                expected: self.data.len(),
                actual: self.pos,
            });
        }
        Ok(())
    }
}

/// Sequential writer, the inverse of [`LayoutReader`].
pub struct LayoutWriter {
    layout: &'static Layout,
    buf: Vec<u8>,
    index: usize,
    pos: usize,
}

impl LayoutWriter {
    pub fn new(layout: &'static Layout) -> Self {
        Self {
            layout,
            buf: vec![0; layout.size()],
            index: 0,
            pos: 0,
        }
    }

    fn next(&mut self, kind: FieldKind) -> usize {
        debug_assert_eq!(
            self.layout.fields.get(self.index).map(|f| f.kind),
            Some(kind),
            "{}: field #{} written with the wrong kind",
            self.layout.name,
            self.index
        );
        let offset = self.pos;
        self.pos += kind.width();
        self.index += 1;
        offset
    }

    pub fn u8(&mut self, value: u8) -> Result<&mut Self, DecodeError> {
        let offset = self.next(FieldKind::U8);
        codec::write_u8(&mut self.buf, offset, value)?;
        Ok(self)
    }

    pub fn u16(&mut self, value: u16) -> Result<&mut Self, DecodeError> {
        let offset = self.next(FieldKind::U16);
        codec::write_u16(&mut self.buf, offset, value)?;
        Ok(self)
    }

    pub fn u32(&mut self, value: u32) -> Result<&mut Self, DecodeError> {
        let offset = self.next(FieldKind::U32);
        codec::write_u32(&mut self.buf, offset, value)?;
        Ok(self)
    }

    pub fn u64(&mut self, value: u64) -> Result<&mut Self, DecodeError> {
        let offset = self.next(FieldKind::U64);
        codec::write_u64(&mut self.buf, offset, value)?;
        Ok(self)
    }

    pub fn bytes(&mut self, value: &[u8]) -> Result<&mut Self, DecodeError> {
        let offset = self.next(FieldKind::Bytes(value.len()));
        codec::write_bytes(&mut self.buf, offset, value)?;
        Ok(self)
    }

    pub fn pubkey(&mut self, value: &Pubkey) -> Result<&mut Self, DecodeError> {
        let offset = self.next(FieldKind::Pubkey);
        codec::write_pubkey(&mut self.buf, offset, value)?;
        Ok(self)
    }

    pub fn pubkeys(&mut self, values: &[Pubkey]) -> Result<&mut Self, DecodeError> {
        let offset = self.next(FieldKind::PubkeyArray(values.len()));
        for (i, value) in values.iter().enumerate() {
            codec::write_pubkey(&mut self.buf, offset + i * PUBKEY_BYTES, value)?;
        }
        Ok(self)
    }

    pub fn finish(self) -> Result<Vec<u8>, DecodeError> {
        if self.index != self.layout.fields.len() || self.pos != self.buf.len() {
            return Err(DecodeError::LengthMismatch {
                layout: self.layout.name,
                expected: self.buf.len(),
                actual: self.pos,
            });
        }
        Ok(self.buf)
    }
}
