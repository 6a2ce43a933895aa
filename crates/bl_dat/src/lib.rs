//! # itemcolorstrings.dat Format Documentation
//!
//! This crate provides utilities to read and decode the **itemcolorstrings.dat**
//! localization file shipped with the game *Boundless*. The file stores the
//! localized names of items, colours and metals for every supported language in
//! a compact bit-packed encoding built around shared word dictionaries.
//!
//! ## File Structure
//!
//! The file starts with a small header describing the item list and the
//! per-language table offsets:
//!
//! | Offset (bytes) | Field                  | Description                                                |
//! |----------------|------------------------|------------------------------------------------------------|
//! | 0x0000         | Metal Count            | 1 byte: The number of metal names per language             |
//! | 0x0001         | Item Count             | 2 bytes: The number of item names per language             |
//! | 0x0003         | Item Records           | Item Count × 3 bytes: (u16 item id, u8 subtitle index)     |
//! | ...            | Language Count         | 1 byte: The number of languages in the file                |
//! | ...            | Language Records       | Per language: (u8 name length, name bytes, u32 offset)     |
//!
//! There is no explicit subtitle count; it is derived while scanning the item
//! records as one plus the largest subtitle index observed.
//!
//! ### Language Block
//!
//! Each language record's offset points at three table offsets, followed
//! immediately by the subtitle string table:
//!
//! | Offset (bytes) | Field                  | Description                                             |
//! |----------------|------------------------|---------------------------------------------------------|
//! | 0x0000         | Colour Table Offset    | 4 bytes: Offset of the colour name string table         |
//! | 0x0004         | Metal Table Offset     | 4 bytes: Offset of the metal name string table          |
//! | 0x0008         | Item Table Offset      | 4 bytes: Offset of the item name string table           |
//! | 0x000C         | Subtitle Table         | The subtitle string table starts here directly          |
//!
//! ### String Table
//!
//! Every string table shares one layout. All offsets are absolute file offsets:
//!
//! | Offset (bytes) | Field                  | Description                                             |
//! |----------------|------------------------|---------------------------------------------------------|
//! | 0x0000         | Encodings Offset       | 4 bytes: Offset of the per-entry word encodings         |
//! | 0x0004         | Word Index Offset      | 4 bytes: Offset of the word index table                 |
//! | 0x0008         | Words Offset           | 4 bytes: Offset of the raw word bytes                   |
//! | 0x000C         | Index Bit Length       | 1 byte: Bits per entry in the encoding index table      |
//! | 0x000D         | Encoding Index Table   | One bit-packed integer per entry: the byte offset of    |
//! |                |                        | that entry's encoding within the encodings region       |
//!
//! At *Encodings Offset*, each entry's encoding is a sequence of bit-packed
//! variable-length fields with no byte alignment: a leading field holding the
//! entry's word count, then one field per word holding an index into the word
//! index table. Every field starts with a 2-bit tag selecting one of four
//! fixed (bit offset, bit length) shapes; the data bits live at the shape's
//! offset relative to the tag position.
//!
//! At *Word Index Offset*, a 1-byte bit length is followed by a bit-packed
//! array of byte offsets into the words region. Adjacent offsets delimit each
//! word, so one extra sentinel entry past the last word gives the final
//! word's length by subtraction.
//!
//! At *Words Offset*, the dictionary words are stored back to back as
//! ISO-8859-1 bytes. An entry's name is its words joined by single spaces.
//!
//! ## Additional Information
//!
//! - **File Name**: `itemcolorstrings.dat`
//! - **Endianness**: Little-endian for all multi-byte integers
//! - **Colour Count**: Fixed at 255 for every language
//!

pub mod bits;
pub mod error;
pub mod read;
pub mod types;

#[cfg(feature = "serde")]
mod serde;

pub use read::{ObjectNameCatalog, StringTable, Translation};
pub use types::{ItemRecord, NameCounts, VarLenCode};
