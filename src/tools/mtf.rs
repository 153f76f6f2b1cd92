/// Encode data using the Move To Front transform over the full byte alphabet. Each byte is
/// replaced by its current position in the symbol list, then moved to the front of the list.
pub fn mtf_encode(data: &[u8]) -> Vec<u8> {
    let mut index = initial_index();
    let mut out = Vec::with_capacity(data.len());

    for &byte in data {
        // The symbol is always in the list, so position() cannot miss
        let idx = index.iter().position(|&c| c == byte).unwrap_or_default();
        out.push(idx as u8);
        move_to_front(&mut index, idx);
    }
    out
}

/// Decode Move To Front data. Each input byte is a position in the symbol list.
pub fn mtf_decode(data: &[u8]) -> Vec<u8> {
    let mut index = initial_index();
    let mut out = Vec::with_capacity(data.len());

    for &idx in data {
        out.push(index[idx as usize]);
        move_to_front(&mut index, idx as usize);
    }
    out
}

/// Symbol list in byte order.
fn initial_index() -> [u8; 256] {
    let mut index = [0_u8; 256];
    index
        .iter_mut()
        .enumerate()
        .for_each(|(i, s)| *s = i as u8);
    index
}

/// Shift each symbol in front of idx back one place and put the symbol at idx at the front.
fn move_to_front(index: &mut [u8; 256], idx: usize) {
    let temp_sym = index[idx];
    index.copy_within(0..idx, 1);
    index[0] = temp_sym;
}
