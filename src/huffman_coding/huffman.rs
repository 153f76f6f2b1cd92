use log::{error, trace};

use crate::bitstream::bitreader::BitReader;
use crate::bitstream::bitwriter::BitWriter;
use crate::error::{Error, Result};

/// Deepest trie read_trie() will follow. A trie built from 256 symbols is never deeper than 255.
const MAX_TRIE_DEPTH: usize = 256;

#[derive(Eq, PartialEq, Debug, Clone)]
pub enum NodeData {
    Kids(Box<Node>, Box<Node>),
    Leaf(u8),
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Node {
    /// Frequency of the symbol, or summed frequency of the subtree. Unset (0) on tries read back
    /// from a bitstream.
    pub weight: u64,
    /// Smallest symbol in the subtree. Breaks ties between equal weights.
    pub key: u8,
    pub node_data: NodeData,
}

impl Node {
    /// Create a new leaf
    pub fn leaf(sym: u8, weight: u64) -> Node {
        Node {
            weight,
            key: sym,
            node_data: NodeData::Leaf(sym),
        }
    }

    /// Join two subtrees under a new parent
    pub fn join(left: Node, right: Node) -> Node {
        Node {
            weight: left.weight + right.weight,
            key: left.key.min(right.key),
            node_data: NodeData::Kids(Box::new(left), Box::new(right)),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.node_data, NodeData::Leaf(_))
    }

    /// Number of leaves below (and including) this node.
    pub fn leaf_count(&self) -> usize {
        match &self.node_data {
            NodeData::Kids(left, right) => left.leaf_count() + right.leaf_count(),
            NodeData::Leaf(_) => 1,
        }
    }

    /// Pop order: lowest weight first, then lowest key.
    fn priority(&self) -> (u64, u8) {
        (self.weight, self.key)
    }
}

/// Build the Huffman trie for a table of at most 256 byte frequencies. Missing entries count as zero.
///
/// No symbols at all gives a lone leaf (symbol 0, weight 0), which stands for "nothing encoded".
/// A single symbol is paired with the lowest byte value that never occurs, at weight 0, so every
/// real symbol gets a code of at least one bit.
pub fn build_trie(freqs: &[u32]) -> Node {
    // Turn the frequencies into a list of leaves
    debug_assert!(freqs.len() <= 256, "{} frequencies for 256 symbols", freqs.len());
    let mut tree: Vec<Node> = (0..=255_u8)
        .zip(freqs)
        .filter(|(_, f)| **f > 0)
        .map(|(sym, &f)| Node::leaf(sym, f as u64))
        .collect();

    match tree.len() {
        0 => return Node::leaf(0, 0),
        1 => {
            let placeholder = (0..=255_u8)
                .find(|&sym| freqs.get(sym as usize).copied().unwrap_or_default() == 0)
                .unwrap_or_default();
            trace!("Single symbol input, adding placeholder symbol {}", placeholder);
            tree.push(Node::leaf(placeholder, 0));
        }
        _ => {}
    }

    // ...then pare it down to one single node with child nodes - keep it sorted.
    while tree.len() > 1 {
        // Sorted highest first, so the two lowest nodes sit at the end
        tree.sort_unstable_by(|a, b| b.priority().cmp(&a.priority()));

        if let (Some(left_child), Some(right_child)) = (tree.pop(), tree.pop()) {
            tree.push(Node::join(left_child, right_child));
        }
    }
    tree.pop().unwrap_or_else(|| Node::leaf(0, 0))
}

/// Huffman codes for each byte value, as a path of bits from the root (false = left).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: Vec<Vec<bool>>,
}

impl CodeTable {
    /// Walk the trie once and record the path to every leaf.
    pub fn new(root: &Node) -> Self {
        let mut codes = vec![Vec::new(); 256];
        let mut path = Vec::with_capacity(32);
        build_code(root, &mut path, &mut codes);
        Self { codes }
    }

    /// Code for a symbol. Empty for symbols that are not in the trie.
    pub fn code(&self, sym: u8) -> &[bool] {
        &self.codes[sym as usize]
    }

    /// Every (symbol, code) pair with a non-empty code.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &[bool])> {
        self.codes
            .iter()
            .enumerate()
            .filter(|(_, code)| !code.is_empty())
            .map(|(sym, code)| (sym as u8, code.as_slice()))
    }

    /// Total bits needed to encode data with the given frequencies.
    pub fn encoded_bits(&self, freqs: &[u32]) -> u64 {
        freqs
            .iter()
            .zip(&self.codes)
            .map(|(&f, code)| f as u64 * code.len() as u64)
            .sum()
    }
}

/// Recursively walk the trie, adding 0 (left) or 1 (right) to the path. Leaves take a copy of the path.
fn build_code(node: &Node, path: &mut Vec<bool>, codes: &mut [Vec<bool>]) {
    match &node.node_data {
        NodeData::Kids(left_child, right_child) => {
            path.push(false);
            build_code(left_child, path, codes);
            path.pop();
            path.push(true);
            build_code(right_child, path, codes);
            path.pop();
        }
        NodeData::Leaf(sym) => codes[*sym as usize] = path.clone(),
    }
}

/// Write the trie in preorder: a leaf is a 1 bit and its 8 bit symbol, an internal node is a 0
/// bit followed by its left and right subtrees.
pub fn write_trie<W: std::io::Write>(node: &Node, bw: &mut BitWriter<W>) -> Result<()> {
    match &node.node_data {
        NodeData::Leaf(sym) => {
            bw.write_bit(true)?;
            bw.write_byte(*sym)
        }
        NodeData::Kids(left_child, right_child) => {
            bw.write_bit(false)?;
            write_trie(left_child, bw)?;
            write_trie(right_child, bw)
        }
    }
}

/// Read a trie written by write_trie(). Weights are not stored, so every node comes back at 0.
pub fn read_trie<R: std::io::Read>(br: &mut BitReader<R>) -> Result<Node> {
    read_node(br, 0)
}

fn read_node<R: std::io::Read>(br: &mut BitReader<R>, depth: usize) -> Result<Node> {
    if br.read_bit()? {
        return Ok(Node::leaf(br.read_byte()?, 0));
    }
    if depth >= MAX_TRIE_DEPTH {
        error!("Trie deeper than {} levels at {}", MAX_TRIE_DEPTH, br.loc());
        return Err(Error::MalformedArtifact(format!(
            "trie is deeper than {} levels",
            MAX_TRIE_DEPTH
        )));
    }
    let left_child = read_node(br, depth + 1)?;
    let right_child = read_node(br, depth + 1)?;
    Ok(Node::join(left_child, right_child))
}

/// Walk from the root to a leaf, one bit per step, and return its symbol.
pub fn decode_symbol<R: std::io::Read>(root: &Node, br: &mut BitReader<R>) -> Result<u8> {
    let mut node = root;
    loop {
        match &node.node_data {
            NodeData::Leaf(sym) => return Ok(*sym),
            NodeData::Kids(left_child, right_child) => {
                node = if br.read_bit()? {
                    right_child.as_ref()
                } else {
                    left_child.as_ref()
                };
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::{build_trie, read_trie, write_trie, CodeTable, Node, NodeData};
    use crate::bitstream::bitreader::BitReader;
    use crate::bitstream::bitwriter::BitWriter;
    use crate::error::Error;
    use crate::tools::freq_count::freqs;

    fn is_prefix_free(table: &CodeTable) -> bool {
        let codes: Vec<&[bool]> = table.iter().map(|(_, c)| c).collect();
        codes.iter().enumerate().all(|(i, a)| {
            codes
                .iter()
                .enumerate()
                .all(|(j, b)| i == j || !b.starts_with(a))
        })
    }

    #[test]
    fn abracadabra_test() {
        let f = freqs(b"ABRACADABRA");
        let root = build_trie(&f);
        assert_eq!(root.leaf_count(), 5);
        assert_eq!(root.weight, 11);

        let table = CodeTable::new(&root);
        let len = |c: u8| table.code(c).len();
        assert_eq!(len(b'A'), 1);
        assert!(len(b'A') <= len(b'B'));
        assert!(len(b'B') <= len(b'C'));
        assert!(len(b'R') <= len(b'D'));
        assert!(table.code(b'Z').is_empty());
        assert!(is_prefix_free(&table));
        assert_eq!(table.encoded_bits(&f), 23);
    }

    #[test]
    fn tie_break_test() {
        // Four equal weights: (a, b) join first, then (c, d), then the two pairs.
        let f = freqs(b"dcba");
        let table = CodeTable::new(&build_trie(&f));
        assert_eq!(table.code(b'a'), &[false, false]);
        assert_eq!(table.code(b'b'), &[false, true]);
        assert_eq!(table.code(b'c'), &[true, false]);
        assert_eq!(table.code(b'd'), &[true, true]);
    }

    #[test]
    fn short_table_test() {
        // Symbols past the end of the table count as absent
        let f = [0_u32, 3, 1];
        let table = CodeTable::new(&build_trie(&f));
        assert_eq!(table.code(1), &[true]);
        assert_eq!(table.code(2), &[false]);
        assert!(table.code(0).is_empty());
        assert!(table.code(255).is_empty());
    }

    #[test]
    fn deterministic_test() {
        let f = freqs(b"the quick brown fox jumps over the lazy dog");
        assert_eq!(CodeTable::new(&build_trie(&f)), CodeTable::new(&build_trie(&f)));
    }

    #[test]
    fn single_symbol_test() {
        let root = build_trie(&freqs(b"AAAAAAAA"));
        assert_eq!(root.leaf_count(), 2);
        match &root.node_data {
            NodeData::Kids(left, right) => {
                // Placeholder is byte 0, weight 0, so it pops first and goes left
                assert_eq!(left.node_data, NodeData::Leaf(0));
                assert_eq!(right.node_data, NodeData::Leaf(b'A'));
            }
            NodeData::Leaf(_) => panic!("expected two leaves"),
        }
        let table = CodeTable::new(&root);
        assert_eq!(table.code(b'A'), &[true]);
    }

    #[test]
    fn single_zero_symbol_test() {
        // Byte 0 is in use, so the placeholder must be byte 1
        let root = build_trie(&freqs(&[0, 0, 0]));
        let syms: Vec<u8> = CodeTable::new(&root).iter().map(|(s, _)| s).collect();
        assert_eq!(syms, vec![0, 1]);
    }

    #[test]
    fn empty_test() {
        let root = build_trie(&freqs(b""));
        assert!(root.is_leaf());
        assert_eq!(root.weight, 0);
    }

    #[test]
    fn all_symbols_test() {
        let data: Vec<u8> = (0..=255).collect();
        let table = CodeTable::new(&build_trie(&freqs(&data)));
        assert_eq!(table.iter().count(), 256);
        assert!(table.iter().all(|(_, code)| code.len() == 8));
        assert!(is_prefix_free(&table));
    }

    #[test]
    fn trie_bits_test() {
        // Two leaves: 0, then 1 + 'a', then 1 + 'b'
        let root = Node::join(Node::leaf(b'a', 1), Node::leaf(b'b', 1));
        let mut bw = BitWriter::new(Vec::new());
        write_trie(&root, &mut bw).unwrap();
        assert_eq!(bw.bit_count(), 19);
        let out = bw.into_inner().unwrap();
        assert_eq!(out, vec![0b0101_1000, 0b0110_1100, 0b0100_0000]);
    }

    #[test]
    fn trie_read_back_test() {
        let root = build_trie(&freqs(b"she sells sea shells by the sea shore"));
        let mut bw = BitWriter::new(Vec::new());
        write_trie(&root, &mut bw).unwrap();
        let out = bw.into_inner().unwrap();

        let mut br = BitReader::new(out.as_slice());
        let read_back = read_trie(&mut br).unwrap();
        assert_eq!(CodeTable::new(&read_back), CodeTable::new(&root));
    }

    #[test]
    fn deep_trie_test() {
        // Nothing but internal node flags
        let zeros = vec![0_u8; 64];
        let mut br = BitReader::new(zeros.as_slice());
        assert!(matches!(read_trie(&mut br), Err(Error::MalformedArtifact(_))));
    }

    #[test]
    fn truncated_trie_test() {
        let mut br = BitReader::new([0b0100_0000_u8].as_slice());
        assert!(matches!(read_trie(&mut br), Err(Error::EndOfStream)));
    }
}
