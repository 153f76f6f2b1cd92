//! bwzip: the core of a block-sorting compressor.
//!
//! Provides three pieces that work on a whole block held in memory:
//! - A bit level stream codec (MSB first) over any reader or writer.
//! - A circular suffix array, sorted with a three-way radix quicksort, and the Burrows-Wheeler
//!   transform built on it.
//! - A Huffman codec that writes its trie, the block length and the coded bytes as one artifact.
//!
//! Basic usage:
//!
//! ```
//! let artifact = bwzip::compress(b"ABRACADABRA").unwrap();
//! assert_eq!(bwzip::expand(&artifact).unwrap(), b"ABRACADABRA");
//!
//! let csa = bwzip::CircularSuffixArray::new(b"ABAB");
//! assert_eq!(csa.index(0).unwrap(), 0);
//! ```
//!
//! The move to front transform, a hex dump helper and the command line parsing used by the
//! `bwzip` binary live in `tools`.
//!
#![warn(rust_2018_idioms)]

pub mod bitstream;
pub mod bwt_algorithms;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use bwt_algorithms::bwt_sort::{bwt_decode, bwt_encode};
pub use bwt_algorithms::circular_suffix_array::CircularSuffixArray;
pub use compression::compress::{compress, compress_stream};
pub use compression::decompress::{expand, expand_stream};
pub use error::{Error, Result};
