use huffman_codec::{decode, encode, FrequencyTable};
use proptest::prelude::*;

/// Optimal total code length for `freq`, by merging a sorted list.
fn optimal_cost(freq: &FrequencyTable) -> u64 {
    let mut weights: Vec<u64> = freq.iter().map(|(_, f)| f).collect();
    if weights.len() < 2 {
        return freq.total();
    }
    let mut cost = 0;
    while weights.len() > 1 {
        weights.sort_unstable_by(|a, b| b.cmp(a));
        let a = weights.pop().unwrap();
        let b = weights.pop().unwrap();
        cost += a + b;
        weights.push(a + b);
    }
    cost
}

proptest! {
    #[test]
    fn test_roundtrip(input in prop::collection::vec(any::<u8>(), 1..400)) {
        let encoded = encode(&input).unwrap();
        let decoded = decode(&encoded.compressed, encoded.tree.as_ref()).unwrap();
        prop_assert_eq!(input, decoded);
    }

    #[test]
    fn test_roundtrip_small_alphabet(input in prop::collection::vec(0u8..4, 1..200)) {
        let encoded = encode(&input).unwrap();
        let decoded = decode(&encoded.compressed, encoded.tree.as_ref()).unwrap();
        prop_assert_eq!(input, decoded);
    }

    #[test]
    fn test_prefix_free(input in prop::collection::vec(any::<u8>(), 1..300)) {
        let encoded = encode(&input).unwrap();
        let codes: Vec<_> = encoded.codes.iter().collect();
        for (i, (_, a)) in codes.iter().enumerate() {
            prop_assert!(!a.is_empty());
            for (j, (_, b)) in codes.iter().enumerate() {
                if i != j {
                    prop_assert!(!a.is_prefix_of(b));
                }
            }
        }
    }

    #[test]
    fn test_optimal_length(input in prop::collection::vec(0u8..16, 1..300)) {
        let freq = FrequencyTable::count(&input);
        let encoded = encode(&input).unwrap();
        let weighted = encoded.codes.weighted_length(&freq).unwrap();
        prop_assert_eq!(weighted, encoded.compressed_bits() as u64);
        prop_assert_eq!(weighted, optimal_cost(&freq));
    }

    #[test]
    fn test_length_independent_of_labels(
        input in prop::collection::vec(0u8..8, 1..200),
        shift in 1u8..=255,
    ) {
        // Relabelling symbols keeps the frequency multiset but changes tie order.
        let relabelled: Vec<u8> = input.iter().map(|s| s.wrapping_add(shift)).collect();
        let a = encode(&input).unwrap();
        let b = encode(&relabelled).unwrap();
        prop_assert_eq!(a.compressed_bits(), b.compressed_bits());
        let decoded = decode(&b.compressed, b.tree.as_ref()).unwrap();
        prop_assert_eq!(relabelled, decoded);
    }

    #[test]
    fn test_single_symbol_alphabet(symbol in any::<u8>(), n in 1usize..100) {
        let input = vec![symbol; n];
        let encoded = encode(&input).unwrap();
        prop_assert_eq!(encoded.codes.get(symbol).unwrap().to_string(), "0");
        prop_assert_eq!(encoded.compressed.to_string(), "0".repeat(n));
        let decoded = decode(&encoded.compressed, encoded.tree.as_ref()).unwrap();
        prop_assert_eq!(input, decoded);
    }
}

#[test]
fn test_empty_input() {
    let encoded = encode(b"").unwrap();
    assert!(encoded.codes.is_empty());
    assert!(encoded.compressed.is_empty());
    assert_eq!(decode(&encoded.compressed, None).unwrap(), Vec::<u8>::new());
}
