//! Bit-field extraction primitives
//!
//! Every bit-packed structure in the file is read through these helpers: a
//! field is addressed by a byte-aligned base offset plus a bit offset from
//! that base, and its value is taken least-significant-bit-first from the
//! little-endian 32-bit word containing its first bit. A field must fit
//! entirely inside that word; the shapes the format uses never exceed ten
//! bits, so anything wider is corrupt data.

use byteorder::{ByteOrder, LittleEndian};

use crate::error::{Error, Result};
use crate::types::VarLenCode;

/// Extract the `bit_length`-bit unsigned integer stored `bit_offset` bits
/// past `base`.
pub fn read_bits(data: &[u8], base: usize, bit_offset: usize, bit_length: usize) -> Result<u32> {
    let byte_offset = bit_offset / 8;
    let bit_in_byte = bit_offset % 8;

    if bit_in_byte + bit_length > 32 {
        return Err(Error::FieldTooWide {
            bit_offset,
            bit_length,
        });
    }

    let offset = base + byte_offset;
    let word = read_u32(data, offset)?;

    let mask = if bit_length == 32 {
        u32::MAX
    } else {
        (1u32 << bit_length) - 1
    };
    Ok((word >> bit_in_byte) & mask)
}

/// Extract entry `index` from a packed array of `bit_length`-bit integers
/// starting at `base`.
pub fn read_packed(data: &[u8], base: usize, bit_length: usize, index: usize) -> Result<u32> {
    read_bits(data, base, index * bit_length, bit_length)
}

/// Decode the 2-bit field tag stored `bit_offset` bits past `base` into its
/// field shape.
pub fn read_var_len(data: &[u8], base: usize, bit_offset: usize) -> Result<VarLenCode> {
    let tag = read_bits(data, base, bit_offset, 2)?;
    VarLenCode::from_tag(tag as u8)
}

/// Load the little-endian u32 at `offset`.
fn read_u32(data: &[u8], offset: usize) -> Result<u32> {
    match data.get(offset..offset + 4) {
        Some(bytes) => Ok(LittleEndian::read_u32(bytes)),
        None => Err(Error::UnexpectedEof { offset, need: 4 }),
    }
}
