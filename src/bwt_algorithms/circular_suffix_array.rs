use std::cmp::Ordering;

use log::{debug, trace};

use crate::error::{Error, Result};

/// Ranges at or below this size are insertion sorted instead of partitioned.
const QSORT_SMALL_THRESH: usize = 10;

/// Sorted circular suffixes (rotations) of a block.
///
/// The block is stored twice in a row, so the rotation starting at offset `o` is simply
/// `doubled[o..o + n]` and no comparison ever needs to wrap around.
#[derive(Debug, Clone)]
pub struct CircularSuffixArray {
    end: usize,
    index: Vec<usize>,
    doubled: Vec<u8>,
}

impl CircularSuffixArray {
    /// Sort the rotations of `block`. Works for any block, including an empty one.
    pub fn new(block: &[u8]) -> Self {
        let end = block.len();
        let mut doubled = Vec::with_capacity(end * 2);
        doubled.extend_from_slice(block);
        doubled.extend_from_slice(block);

        let mut index = (0..end).collect::<Vec<usize>>();
        if end > 1 {
            q_sort3(&mut index, &doubled, end);
        }
        debug!("Sorted {} circular suffixes", end);

        Self {
            end,
            index,
            doubled,
        }
    }

    /// Length of the block.
    pub fn len(&self) -> usize {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.end == 0
    }

    /// Starting offset of the i-th smallest circular suffix.
    pub fn index(&self, i: usize) -> Result<usize> {
        self.index.get(i).copied().ok_or(Error::IndexOutOfRange {
            index: i,
            len: self.index.len(),
        })
    }

    /// All starting offsets in sorted order. Empty after release().
    pub fn indices(&self) -> &[usize] {
        &self.index
    }

    /// The bytes of the i-th smallest circular suffix.
    pub fn rotation(&self, i: usize) -> Result<&[u8]> {
        let start = self.index(i)?;
        Ok(&self.doubled[start..start + self.end])
    }

    /// Drop the sorted index and the doubled block. Every later index() or rotation()
    /// query fails with IndexOutOfRange; len() still reports the block length.
    pub fn release(&mut self) {
        self.index = Vec::new();
        self.doubled = Vec::new();
    }
}

/// Three-way radix quicksort of `index` by the rotation each entry starts in `doubled`.
/// Ranges to sort live on an explicit stack of (lo, hi, depth), hi inclusive.
fn q_sort3(index: &mut [usize], doubled: &[u8], end: usize) {
    let mut stack: Vec<(usize, usize, usize)> = Vec::with_capacity(64);
    stack.push((0, index.len() - 1, 0));

    let mut max_stack = 0;
    while let Some((lo, hi, d)) = stack.pop() {
        max_stack = max_stack.max(stack.len() + 1);

        // Every byte of these rotations matched, so they are identical. Order by offset.
        if d >= end {
            index[lo..=hi].sort_unstable();
            continue;
        }

        // Small ranges are cheaper to insertion sort on the full rotation
        if hi - lo < QSORT_SMALL_THRESH {
            simple_sort(index, doubled, end, lo, hi, d);
            continue;
        }

        // Use the median of the first, middle and last byte at this depth as the pivot,
        // and park the element holding it at lo.
        let mid = lo + ((hi - lo) >> 1);
        let med = mmed3(
            doubled[index[lo] + d],
            doubled[index[mid] + d],
            doubled[index[hi] + d],
        );
        let pivot = [lo, mid, hi]
            .into_iter()
            .find(|&p| doubled[index[p] + d] == med)
            .unwrap_or(lo);
        index.swap(lo, pivot);

        // lt..=gt collects the bytes equal to the pivot
        let mut lt = lo;
        let mut gt = hi;
        let mut un = lo + 1;
        while un <= gt {
            match doubled[index[un] + d].cmp(&med) {
                Ordering::Less => {
                    index.swap(lt, un);
                    lt += 1;
                    un += 1;
                }
                Ordering::Greater => {
                    index.swap(un, gt);
                    gt -= 1;
                }
                Ordering::Equal => un += 1,
            }
        }

        if lt > lo {
            stack.push((lo, lt - 1, d));
        }
        if gt < hi {
            stack.push((gt + 1, hi, d));
        }
        if gt > lt {
            stack.push((lt, gt, d + 1));
        }
    }
    trace!("q_sort3 stack peaked at {} ranges", max_stack);
}

/// Insertion sort of index[lo..=hi], comparing rotations from depth d onwards.
fn simple_sort(index: &mut [usize], doubled: &[u8], end: usize, lo: usize, hi: usize, d: usize) {
    for i in lo + 1..=hi {
        let tmp = index[i];
        let mut j = i;
        while j > lo && rotation_cmp(index[j - 1], tmp, doubled, end, d) == Ordering::Greater {
            index[j] = index[j - 1];
            j -= 1;
        }
        index[j] = tmp;
    }
}

/// Compare the rotations starting at a and b, skipping the first d bytes (already known
/// to match). Identical rotations are ordered by offset.
fn rotation_cmp(a: usize, b: usize, doubled: &[u8], end: usize, d: usize) -> Ordering {
    doubled[a + d..a + end]
        .cmp(&doubled[b + d..b + end])
        .then(a.cmp(&b))
}

/// Return the middle value of these three
fn mmed3(mut a: u8, mut b: u8, c: u8) -> u8 {
    if a > b {
        std::mem::swap(&mut a, &mut b);
    };
    if b > c {
        b = c;
        if a > b {
            b = a;
        }
    }
    b
}
