//! Error types shared by the bit codec, the suffix sorter and the Huffman codec.

use thiserror::Error;

/// Everything that can go wrong while sorting, compressing or expanding a block.
#[derive(Debug, Error)]
pub enum Error {
    /// A suffix array query asked for a position past the end (or after release).
    #[error("index {index} is out of range for a suffix array of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A bit or byte read ran past the end of the source.
    #[error("unexpected end of stream")]
    EndOfStream,

    /// The trie or the encoded body could not be rebuilt from the artifact.
    #[error("malformed artifact: {0}")]
    MalformedArtifact(String),

    /// The block does not fit the 32 bit length field.
    #[error("block of {0} bytes is too large for a 32 bit length field")]
    BlockTooLarge(usize),

    /// The underlying reader or writer failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
