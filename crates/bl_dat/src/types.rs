//! Base types for the structure of the itemcolorstrings.dat file.

use binrw::{BinRead, BinWrite};

use crate::error::{Error, Result};

/// String table header
///
/// Every string table starts with three absolute file offsets and the bit
/// length used by its encoding index table. All data is stored in little
/// endian format.
#[derive(BinRead, BinWrite, Debug, Default, Copy, Clone, PartialEq, Eq)]
#[brw(little)]
pub struct StringTableHeader {
    /// The offset from the beginning of the file where the per-entry word
    /// encodings start
    pub encodings_offset: u32,

    /// The offset from the beginning of the file where the word index table
    /// starts
    pub word_index_offset: u32,

    /// The offset from the beginning of the file where the raw word bytes
    /// start
    pub words_offset: u32,

    /// The number of bits per entry in the encoding index table
    pub bit_length: u8,
}

/// Per-language table offsets
///
/// Found at each language's offset; the subtitle string table follows these
/// twelve bytes directly, so it needs no offset of its own.
#[derive(BinRead, BinWrite, Debug, Default, Copy, Clone, PartialEq, Eq)]
#[brw(little)]
pub struct TranslationOffsets {
    /// The offset of the colour name string table
    pub colour_strings: u32,

    /// The offset of the metal name string table
    pub metal_strings: u32,

    /// The offset of the item name string table
    pub item_strings: u32,
}

/// One entry of the item list at the top of the file
///
/// Ties a game item id to the subtitle shown under its localized name. The
/// subtitle index addresses the per-language subtitle string table.
#[derive(BinRead, BinWrite, Debug, Default, Copy, Clone, PartialEq, Eq)]
#[brw(little)]
pub struct ItemRecord {
    /// The game's numeric item id
    pub id: u16,

    /// Index into the subtitle string table
    pub subtitle_index: u8,
}

/// Entry counts for the string tables of a single language
///
/// Only metals, items and languages are stored in the file header. The colour
/// count is fixed by the format, and the subtitle count is derived from the
/// largest subtitle index referenced by the item records.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct NameCounts {
    /// Number of colour names, fixed at 255 by the format
    pub colours: usize,
    /// Number of item names
    pub items: usize,
    /// Number of languages in the file
    pub languages: usize,
    /// Number of metal names
    pub metals: usize,
    /// Number of subtitles, one more than the largest referenced index
    pub subtitles: usize,
}

impl Default for NameCounts {
    fn default() -> Self {
        Self {
            colours: 255,
            items: 0,
            languages: 0,
            metals: 0,
            subtitles: 0,
        }
    }
}

/// One of the four field shapes used by the per-entry word encodings
///
/// Every bit-packed field opens with a 2-bit tag selecting a shape. The shape
/// places the data bits at `data_offset` bits from the tag position; the two
/// 3-bit shapes overlap the tag's high bit with the data's low bit, which is
/// how the format squeezes a 3-bit value into 4 bits total.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct VarLenCode {
    /// Offset of the data bits from the tag position
    pub data_offset: usize,
    /// Width of the data bits
    pub data_len: usize,
}

const VAR_LEN: [VarLenCode; 4] = [
    VarLenCode { data_offset: 1, data_len: 3 },
    VarLenCode { data_offset: 2, data_len: 6 },
    VarLenCode { data_offset: 1, data_len: 3 },
    VarLenCode { data_offset: 2, data_len: 10 },
];

impl VarLenCode {
    /// Look up the field shape named by a 2-bit tag.
    pub fn from_tag(tag: u8) -> Result<Self> {
        VAR_LEN
            .get(tag as usize)
            .copied()
            .ok_or(Error::InvalidEncodingTag(tag))
    }

    /// Total bit span of a field using this shape, tag included.
    pub fn span(&self) -> usize {
        self.data_offset + self.data_len
    }
}
