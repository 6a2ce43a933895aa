//! Types for reading the object name catalog
//!

use binrw::BinRead;
use byteorder::{LittleEndian, ReadBytesExt};
use std::{
    collections::HashMap,
    fs::File,
    io::{Cursor, Read},
    path::Path,
};
use tracing::debug;

use crate::bits::{read_bits, read_packed, read_var_len};
use crate::error::{Error, Result};
use crate::types::{ItemRecord, NameCounts, StringTableHeader, TranslationOffsets};

/// Byte size of [`StringTableHeader`] on disk: three u32 offsets and the
/// index bit length.
const STRING_TABLE_HEADER_LEN: usize = 13;

/// Byte size of [`TranslationOffsets`] on disk.
const TRANSLATION_OFFSETS_LEN: usize = 12;

/// A decoded string table
///
/// Holds the fully assembled names for one table of one language. The
/// bit-packed index structures are consumed during decoding and not kept.
pub struct StringTable {
    names: Vec<String>,
}

impl StringTable {
    /// Decode the string table at `offset`, which addresses `count` entries.
    pub(crate) fn decode(data: &[u8], offset: usize, count: usize) -> Result<StringTable> {
        let slice = slice_at(data, offset, STRING_TABLE_HEADER_LEN)?;
        let header = StringTableHeader::read(&mut Cursor::new(slice))?;
        let encodings_offset = header.encodings_offset as usize;
        let word_index_offset = header.word_index_offset as usize;
        let words_offset = header.words_offset as usize;

        if header.bit_length == 0 {
            return Err(Error::InvalidFile);
        }

        // The encoding index table follows the header directly.
        let index_base = offset + STRING_TABLE_HEADER_LEN;
        let mut encoding_indices = Vec::with_capacity(count);
        for i in 0..count {
            let index = read_packed(data, index_base, header.bit_length as usize, i)?;
            encoding_indices.push(index as usize);
        }

        let word_offsets = Self::decode_word_index(data, word_index_offset, words_offset)?;

        let mut names = Vec::with_capacity(count);
        for &encoding_index in &encoding_indices {
            let encoding_offset = encodings_offset + encoding_index;

            let mut bit_offset = 0;
            let mut code = read_var_len(data, encoding_offset, bit_offset)?;
            let word_count =
                read_bits(data, encoding_offset, bit_offset + code.data_offset, code.data_len)?;

            let mut name = String::new();
            for w in 0..word_count {
                bit_offset += code.span();
                code = read_var_len(data, encoding_offset, bit_offset)?;
                let word_index =
                    read_bits(data, encoding_offset, bit_offset + code.data_offset, code.data_len)?
                        as usize;

                if w > 0 {
                    name.push(' ');
                }
                name.push_str(&Self::decode_word(data, words_offset, &word_offsets, word_index)?);
            }
            names.push(name);
        }

        Ok(StringTable { names })
    }

    /// Decode the word index table: a 1-byte bit length followed by packed
    /// byte offsets into the words region.
    ///
    /// The entry count is derived from the byte span of the region, which
    /// includes the bit-length prefix, so it overshoots the real word count;
    /// the surplus entries decode to garbage but are never referenced by a
    /// well-formed encodings region. One extra entry past the computed count
    /// is read as the sentinel delimiting the final word.
    fn decode_word_index(
        data: &[u8],
        word_index_offset: usize,
        words_offset: usize,
    ) -> Result<Vec<usize>> {
        let bit_length = *data.get(word_index_offset).ok_or(Error::UnexpectedEof {
            offset: word_index_offset,
            need: 1,
        })? as usize;
        if bit_length == 0 {
            return Err(Error::InvalidFile);
        }

        let span = words_offset
            .checked_sub(word_index_offset)
            .ok_or(Error::InvalidFile)?;
        let count = span * 8 / bit_length + 1;

        let mut offsets = Vec::with_capacity(count);
        for i in 0..count {
            offsets.push(read_packed(data, word_index_offset + 1, bit_length, i)? as usize);
        }
        Ok(offsets)
    }

    /// Extract dictionary word `word_index` from the words region, delimited
    /// by adjacent word index entries, and decode it as ISO-8859-1.
    fn decode_word(
        data: &[u8],
        words_offset: usize,
        word_offsets: &[usize],
        word_index: usize,
    ) -> Result<String> {
        let start = *word_offsets.get(word_index).ok_or(Error::InvalidFile)?;
        let end = *word_offsets.get(word_index + 1).ok_or(Error::InvalidFile)?;
        let length = end.checked_sub(start).ok_or(Error::InvalidFile)?;

        let offset = words_offset + start;
        let bytes = data
            .get(offset..offset + length)
            .ok_or(Error::UnexpectedEof {
                offset,
                need: length,
            })?;

        Ok(bytes.iter().map(|&b| b as char).collect())
    }

    /// Get the name stored at `index`.
    pub fn name(&self, index: usize) -> Result<&str> {
        self.names
            .get(index)
            .map(String::as_str)
            .ok_or(Error::IndexOutOfRange {
                index,
                count: self.names.len(),
            })
    }

    /// Number of entries in this table.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether this table contains no entries
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over the names in entry order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/// The localized names of one language
///
/// Owns four decoded string tables. Built on demand by
/// [`ObjectNameCatalog::translation`]; independent of the catalog once
/// constructed.
pub struct Translation {
    subtitles: StringTable,
    colours: StringTable,
    metals: StringTable,
    items: StringTable,
}

impl Translation {
    pub(crate) fn decode(data: &[u8], offset: usize, counts: &NameCounts) -> Result<Translation> {
        let slice = slice_at(data, offset, TRANSLATION_OFFSETS_LEN)?;
        let offsets = TranslationOffsets::read(&mut Cursor::new(slice))?;

        // The subtitle table has no stored offset; it starts directly after
        // the three table offsets.
        let subtitle_offset = offset + TRANSLATION_OFFSETS_LEN;
        Ok(Translation {
            subtitles: StringTable::decode(data, subtitle_offset, counts.subtitles)?,
            colours: StringTable::decode(data, offsets.colour_strings as usize, counts.colours)?,
            metals: StringTable::decode(data, offsets.metal_strings as usize, counts.metals)?,
            items: StringTable::decode(data, offsets.item_strings as usize, counts.items)?,
        })
    }

    /// Get the subtitle stored at `index`.
    pub fn subtitle(&self, index: usize) -> Result<&str> {
        self.subtitles.name(index)
    }

    /// Get the colour name stored at `index`.
    pub fn colour(&self, index: usize) -> Result<&str> {
        self.colours.name(index)
    }

    /// Get the metal name stored at `index`.
    pub fn metal(&self, index: usize) -> Result<&str> {
        self.metals.name(index)
    }

    /// Get the item name stored at `index`.
    pub fn item(&self, index: usize) -> Result<&str> {
        self.items.name(index)
    }

    /// Get the subtitle table
    pub fn subtitles(&self) -> &StringTable {
        &self.subtitles
    }

    /// Get the colour name table
    pub fn colours(&self) -> &StringTable {
        &self.colours
    }

    /// Get the metal name table
    pub fn metals(&self) -> &StringTable {
        &self.metals
    }

    /// Get the item name table
    pub fn items(&self) -> &StringTable {
        &self.items
    }
}

/// Object name catalog reader
///
/// ```no_run
/// fn list_item_names(path: &std::path::Path) -> bl_dat::error::Result<()> {
///     let catalog = bl_dat::ObjectNameCatalog::open(path)?;
///     let english = catalog.translation("english")?;
///
///     for index in 0..catalog.item_count() {
///         println!("{}", english.item(index)?);
///     }
///
///     Ok(())
/// }
/// ```
pub struct ObjectNameCatalog {
    data: Vec<u8>,
    counts: NameCounts,
    items: Vec<ItemRecord>,
    languages: HashMap<String, u32>,
}

impl ObjectNameCatalog {
    /// Read an itemcolorstrings.dat file and parse its header.
    pub fn new<R: Read>(mut reader: R) -> Result<ObjectNameCatalog> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;

        let mut counts = NameCounts::default();
        let mut cursor = Cursor::new(data.as_slice());

        counts.metals = cursor.read_u8()? as usize;
        counts.items = cursor.read_u16::<LittleEndian>()? as usize;

        let mut items = Vec::with_capacity(counts.items);
        let mut max_subtitle_index = 0usize;
        for _ in 0..counts.items {
            let record = ItemRecord::read(&mut cursor)?;
            max_subtitle_index = max_subtitle_index.max(record.subtitle_index as usize);
            items.push(record);
        }
        // Subtitle index 0 is valid, so the table is one larger than the
        // largest index seen.
        counts.subtitles = max_subtitle_index + 1;

        counts.languages = cursor.read_u8()? as usize;
        let mut languages = HashMap::with_capacity(counts.languages);
        for _ in 0..counts.languages {
            let name_length = cursor.read_u8()? as usize;
            let mut name = vec![0u8; name_length];
            cursor.read_exact(&mut name)?;
            let name: String = name.iter().map(|&b| b as char).collect();

            let offset = cursor.read_u32::<LittleEndian>()?;
            languages.insert(name, offset);
        }

        debug!(
            items = counts.items,
            metals = counts.metals,
            subtitles = counts.subtitles,
            languages = counts.languages,
            "parsed catalog header"
        );

        Ok(ObjectNameCatalog {
            data,
            counts,
            items,
            languages,
        })
    }

    /// Open and read an itemcolorstrings.dat file from disk.
    pub fn open(path: impl AsRef<Path>) -> Result<ObjectNameCatalog> {
        Self::new(File::open(path)?)
    }

    /// Decode the translation for a named language.
    ///
    /// Each call decodes the language's string tables from scratch; the
    /// returned [`Translation`] owns its tables and does not borrow from the
    /// catalog.
    pub fn translation(&self, language: &str) -> Result<Translation> {
        let offset = *self
            .languages
            .get(language)
            .ok_or_else(|| Error::LanguageNotFound(language.to_owned()))?;

        Translation::decode(&self.data, offset as usize, &self.counts)
    }

    /// Entry counts for this catalog's string tables.
    pub fn counts(&self) -> &NameCounts {
        &self.counts
    }

    /// Number of item records in the catalog.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// The item records, in file order.
    pub fn items(&self) -> &[ItemRecord] {
        &self.items
    }

    /// Get an item record by its position in the file.
    pub fn item(&self, index: usize) -> Result<ItemRecord> {
        self.items
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfRange {
                index,
                count: self.items.len(),
            })
    }

    /// Returns an iterator over the language names in this catalog.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(|s| s.as_ref())
    }
}

/// Bounds-check a read of `need` bytes at `offset`, mapping a short buffer
/// to a clean error rather than a binrw EOF.
fn slice_at(data: &[u8], offset: usize, need: usize) -> Result<&[u8]> {
    data.get(offset..)
        .filter(|slice| slice.len() >= need)
        .ok_or(Error::UnexpectedEof { offset, need })
}
