//! The bitstream module forms the I/O subsystem for bwzip.
//!
//! Both directions pack bits MSB first: the first bit written to a byte is its most significant
//! bit, and the first bit read from a byte is its most significant bit. The Huffman codec writes
//! its trie, length field and coded body through these two types.
//!
//! Both are single pass. There is no seeking.
//!
pub mod bitreader;
pub mod bitwriter;
