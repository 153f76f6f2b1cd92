use std::io::{Read, Write};

use log::{debug, info, trace};

use crate::bitstream::bitwriter::BitWriter;
use crate::error::{Error, Result};
use crate::huffman_coding::huffman::{build_trie, write_trie, CodeTable};
use crate::tools::freq_count::{freqs, symbols_used};

/// Huffman compress a whole block and return the compressed bytes.
pub fn compress(input: &[u8]) -> Result<Vec<u8>> {
    // Output is rarely larger than the input plus the trie and length field
    let out = Vec::with_capacity(input.len() / 2 + 64);
    compress_to(input, out)
}

/// Huffman compress a whole block onto a writer. The writer is handed back after the final flush.
pub fn compress_to<W: Write>(input: &[u8], writer: W) -> Result<W> {
    let length = u32::try_from(input.len()).map_err(|_| Error::BlockTooLarge(input.len()))?;

    // Tabulate frequency counts and build the trie and code table from them
    let freq = freqs(input);
    let root = build_trie(&freq);
    let codes = CodeTable::new(&root);
    debug!(
        "{} bytes in block, {} symbols in use, {} trie leaves",
        length,
        symbols_used(&freq),
        root.leaf_count()
    );

    let mut bw = BitWriter::new(writer);

    // Trie first, so the decoder can rebuild it
    write_trie(&root, &mut bw)?;
    trace!("Trie written, length field starts at {}", bw.loc());

    // Number of bytes in the original block
    bw.write_u32_le(length)?;

    // Then the code of each input byte
    for &byte in input {
        for &bit in codes.code(byte) {
            bw.write_bit(bit)?;
        }
    }

    let bits = bw.bit_count();
    let writer = bw.into_inner()?;
    info!(
        "Compressed {} bytes to {} bytes ({} body bits).",
        length,
        (bits + 7) / 8,
        codes.encoded_bits(&freq)
    );
    Ok(writer)
}

/// Read all of `reader` as one block, compress it, and write the result to `writer`.
pub fn compress_stream<R: Read, W: Write>(mut reader: R, writer: W) -> Result<()> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input)?;
    compress_to(&input, writer)?;
    Ok(())
}
