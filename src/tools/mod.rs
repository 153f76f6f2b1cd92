//! The tools module provides the helpers around the bwzip core.
//!
//! The tools are:
//! - cli: Command line interface for bwzip.
//! - freq_count: Byte frequency count, used by the Huffman and BWT code.
//! - hexdump: Hex rendering of output bytes.
//! - mtf: Move-To-Front transform and its inverse.
//!
pub mod cli;
pub mod freq_count;
pub mod hexdump;
pub mod mtf;
