//! Error types that can be emitted from this library
//!

use miette::Diagnostic;
use thiserror::Error;

/// Error type for library
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Transparent wrapper for [`std::io::Error`]
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// Transparent wrapper for [`binrw::Error`]
    #[error(transparent)]
    BinRWError(#[from] binrw::Error),

    /// A read ran past the end of the file data
    #[error("unexpected end of data: {need} bytes needed at offset {offset}")]
    UnexpectedEof {
        /// Byte offset of the failed read
        offset: usize,
        /// Number of bytes the read required
        need: usize,
    },

    /// A bit field does not fit in the 32-bit word holding its first bit
    #[error("bit field of {bit_length} bits at bit {bit_offset} does not fit its 32-bit word")]
    FieldTooWide {
        /// Bit offset of the field from its base
        bit_offset: usize,
        /// Requested width in bits
        bit_length: usize,
    },

    /// File is not a valid object name catalog
    #[error("invalid object name catalog")]
    InvalidFile,

    /// An encoding tag does not name one of the four known field shapes
    #[error("invalid encoding tag {0}")]
    InvalidEncodingTag(u8),

    /// The file contains no language by the requested name
    #[error("unknown language {0:?}")]
    LanguageNotFound(String),

    /// A lookup index is beyond the table it addresses
    #[error("index {index} out of range for table of {count} entries")]
    IndexOutOfRange {
        /// The requested index
        index: usize,
        /// Number of entries in the table
        count: usize,
    },
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
