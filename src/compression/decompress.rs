use std::io::{Read, Write};

use log::{debug, error, info};

use crate::bitstream::bitreader::BitReader;
use crate::error::{Error, Result};
use crate::huffman_coding::huffman::{decode_symbol, read_trie};

/// Expand a compressed block and return the original bytes.
pub fn expand(artifact: &[u8]) -> Result<Vec<u8>> {
    expand_from(artifact)
}

/// Expand a compressed block read from any source.
pub fn expand_from<R: Read>(source: R) -> Result<Vec<u8>> {
    let mut br = BitReader::new(source);

    // Rebuild the trie, then get the number of bytes to decode
    let root = read_trie(&mut br)?;
    let length = br.read_u32_le()? as usize;
    debug!(
        "Trie has {} leaves, {} bytes to decode from {}",
        root.leaf_count(),
        length,
        br.loc()
    );

    // A lone leaf only ever describes an empty block
    if root.is_leaf() && length > 0 {
        error!("Trie has no branches but {} bytes are declared", length);
        return Err(Error::MalformedArtifact(format!(
            "trie has a single leaf but {} bytes are declared",
            length
        )));
    }

    // Cap the up front allocation, the declared length is not trusted yet
    let mut out = Vec::with_capacity(length.min(1 << 20));
    for decoded in 0..length {
        match decode_symbol(&root, &mut br) {
            Ok(sym) => out.push(sym),
            Err(Error::EndOfStream) => {
                error!("Ran out of data after {} of {} bytes", decoded, length);
                return Err(Error::MalformedArtifact(format!(
                    "declared length {} but the data ends after {} bytes",
                    length, decoded
                )));
            }
            Err(e) => return Err(e),
        }
    }

    info!("Expanded {} bytes.", out.len());
    Ok(out)
}

/// Read a compressed block from `reader` and write the expanded bytes to `writer`.
pub fn expand_stream<R: Read, W: Write>(reader: R, mut writer: W) -> Result<()> {
    let out = expand_from(reader)?;
    writer.write_all(&out)?;
    writer.flush()?;
    Ok(())
}
