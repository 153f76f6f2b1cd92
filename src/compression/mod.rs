//! The compression module runs whole-block Huffman compression and expansion.
//!
//! Compressed layout (all bit fields MSB first):
//! - Trie: preorder, 1 bit per internal node, 1 + 8 bits per leaf.
//! - Length: original block length as 4 bytes, little-endian, straight after the trie bits.
//! - Body: the code of every input byte, in order.
//! - Padding: 0-7 zero bits to finish the last byte.
//!
//! Each call owns all of its state. Nothing is kept between calls.
//!

pub mod compress;
pub mod decompress;
