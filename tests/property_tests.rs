use bwzip::huffman_coding::huffman::{build_trie, CodeTable};
use bwzip::tools::freq_count::freqs;
use bwzip::tools::mtf::{mtf_decode, mtf_encode};
use bwzip::{bwt_decode, bwt_encode, compress, expand, CircularSuffixArray, Error};
use proptest::prelude::*;

/// Rotation of `block` starting at `start`.
fn rotation(block: &[u8], start: usize) -> Vec<u8> {
    block[start..].iter().chain(&block[..start]).copied().collect()
}

proptest! {
    #[test]
    fn huffman_round_trip(input in prop::collection::vec(any::<u8>(), 0..2000)) {
        let artifact = compress(&input).unwrap();
        prop_assert_eq!(expand(&artifact).unwrap(), input);
    }

    #[test]
    fn small_alphabet_round_trip(input in prop::collection::vec(0..3u8, 0..2000)) {
        let artifact = compress(&input).unwrap();
        prop_assert_eq!(expand(&artifact).unwrap(), input);
    }

    #[test]
    fn repeated_byte_round_trip(byte in any::<u8>(), len in 1..5000usize) {
        let input = vec![byte; len];
        let artifact = compress(&input).unwrap();
        prop_assert_eq!(expand(&artifact).unwrap(), input);
    }

    #[test]
    fn truncation_is_detected(input in prop::collection::vec(any::<u8>(), 0..500)) {
        let artifact = compress(&input).unwrap();
        let result = expand(&artifact[..artifact.len() - 1]);
        prop_assert!(matches!(
            result,
            Err(Error::EndOfStream) | Err(Error::MalformedArtifact(_))
        ));
    }

    #[test]
    fn codes_are_prefix_free(input in prop::collection::vec(any::<u8>(), 1..1000)) {
        let table = CodeTable::new(&build_trie(&freqs(&input)));
        let codes: Vec<&[bool]> = table.iter().map(|(_, code)| code).collect();
        for (i, a) in codes.iter().enumerate() {
            prop_assert!(!a.is_empty());
            for (j, b) in codes.iter().enumerate() {
                prop_assert!(i == j || !b.starts_with(a));
            }
        }
    }

    #[test]
    fn suffixes_are_sorted(block in prop::collection::vec(0..4u8, 0..300)) {
        let csa = CircularSuffixArray::new(&block);
        prop_assert_eq!(csa.len(), block.len());

        // A permutation of 0..n
        let mut seen = csa.indices().to_vec();
        seen.sort_unstable();
        prop_assert_eq!(seen, (0..block.len()).collect::<Vec<usize>>());

        // Ordered by rotation, then by offset
        for i in 1..csa.len() {
            let a = csa.index(i - 1).unwrap();
            let b = csa.index(i).unwrap();
            let order = rotation(&block, a).cmp(&rotation(&block, b)).then(a.cmp(&b));
            prop_assert_eq!(order, std::cmp::Ordering::Less);
        }
    }

    #[test]
    fn periodic_blocks_are_deterministic(unit in prop::collection::vec(any::<u8>(), 1..6), reps in 1..40usize) {
        let block: Vec<u8> = unit.iter().copied().cycle().take(unit.len() * reps).collect();
        let first = CircularSuffixArray::new(&block);
        let second = CircularSuffixArray::new(&block);
        prop_assert_eq!(first.indices(), second.indices());
        prop_assert_eq!(compress(&block).unwrap(), compress(&block).unwrap());
    }

    #[test]
    fn bwt_round_trip(block in prop::collection::vec(any::<u8>(), 0..1000)) {
        let (key, bwt) = bwt_encode(&block).unwrap();
        prop_assert_eq!(bwt_decode(key, &bwt).unwrap(), block);
    }

    #[test]
    fn mtf_round_trip(block in prop::collection::vec(any::<u8>(), 0..1000)) {
        prop_assert_eq!(mtf_decode(&mtf_encode(&block)), block);
    }

    #[test]
    fn full_pipeline_round_trip(block in prop::collection::vec(0..8u8, 0..1000)) {
        let (key, bwt) = bwt_encode(&block).unwrap();
        let artifact = compress(&mtf_encode(&bwt)).unwrap();
        let restored = bwt_decode(key, &mtf_decode(&expand(&artifact).unwrap())).unwrap();
        prop_assert_eq!(restored, block);
    }
}

#[test]
fn abab_scenario() {
    let csa = CircularSuffixArray::new(b"ABAB");
    let starts: Vec<usize> = (0..csa.len()).map(|i| csa.index(i).unwrap()).collect();
    assert_eq!(starts, vec![0, 2, 1, 3]);
}

#[test]
fn repeated_byte_compacts() {
    let input = vec![b'A'; 1000];
    let artifact = compress(&input).unwrap();
    assert!(artifact.len() < input.len());
    assert_eq!(expand(&artifact).unwrap(), input);
}
