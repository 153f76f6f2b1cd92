//! The huffman module builds the prefix code used by bwzip, and reads and writes it on the bitstream.
//!
//! The trie is a plain Huffman tree over the 256 byte values. Ties between equal weights are
//! broken by the smallest symbol each subtree holds, so the same input always gives the same trie,
//! and the same compressed bytes.
//!
//! The trie travels ahead of the coded data in preorder: one flag bit per node, plus the 8 bit
//! symbol for each leaf. No lengths are needed to rebuild it.
//!

pub mod huffman;
