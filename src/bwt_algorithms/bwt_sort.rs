use log::{debug, info};

use super::circular_suffix_array::CircularSuffixArray;
use crate::error::{Error, Result};
use crate::tools::freq_count::freqs;

/// Burrows-Wheeler-Transform built on the circular suffix array.
/// This returns a u32 Key (the sorted row holding the original block) and the last column.
pub fn bwt_encode(block: &[u8]) -> Result<(u32, Vec<u8>)> {
    if u32::try_from(block.len()).is_err() {
        return Err(Error::BlockTooLarge(block.len()));
    }
    let mut csa = CircularSuffixArray::new(block);
    info!("Sorted {} rotations for the BWT.", csa.len());

    let end = block.len();
    let mut key = 0_u32;
    let mut bwt = Vec::with_capacity(end);
    for (i, &start) in csa.indices().iter().enumerate() {
        if start == 0 {
            key = i as u32;
            bwt.push(block[end - 1]);
        } else {
            bwt.push(block[start - 1]);
        }
    }
    // Only the last column is needed from here on
    csa.release();

    debug!("BWT key is {}", key);
    Ok((key, bwt))
}

/// Decode a Burrows-Wheeler-Transform.
pub fn bwt_decode(key: u32, bwt_in: &[u8]) -> Result<Vec<u8>> {
    let end = bwt_in.len();
    if end == 0 {
        return Ok(Vec::new());
    }
    if key as usize >= end {
        return Err(Error::IndexOutOfRange {
            index: key as usize,
            len: end,
        });
    }

    // Convert frequency count to a cumulative sum of frequencies
    let freq_in = freqs(bwt_in);
    let mut freq = [0_usize; 256];
    for i in 0..255 {
        freq[i + 1] = freq[i] + freq_in[i] as usize;
    }

    // Build the transformation vector to find the next character in the original data
    let mut t_vec = vec![0_usize; end];
    for (i, &s) in bwt_in.iter().enumerate() {
        t_vec[freq[s as usize]] = i;
        freq[s as usize] += 1
    }

    // Follow the chain from the key row to recover the block front to back
    let mut block = Vec::with_capacity(end);
    let mut next = t_vec[key as usize];
    for _ in 0..end {
        block.push(bwt_in[next]);
        next = t_vec[next];
    }

    Ok(block)
}
