/// Returns a frequency count of each of the 256 byte values in the input data.
pub fn freqs(data: &[u8]) -> Vec<u32> {
    let mut freqs = vec![0_u32; 256];
    data.iter().for_each(|&el| freqs[el as usize] += 1);
    freqs
}

/// Number of distinct byte values present in a frequency table.
pub fn symbols_used(freqs: &[u32]) -> usize {
    freqs.iter().filter(|&&f| f > 0).count()
}
