#![no_main]
use huffman_codec::{decode, encode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: Vec<u8>| {
    let encoded = encode(&input).unwrap();
    assert_eq!(encoded.codes.len(), {
        let mut seen = input.clone();
        seen.sort_unstable();
        seen.dedup();
        seen.len()
    });

    let decoded = decode(&encoded.compressed, encoded.tree.as_ref()).unwrap();
    assert_eq!(input, decoded);

    // Any strict prefix of a non-empty encoding must not decode cleanly to the input.
    if let Some(tree) = encoded.tree.as_ref() {
        let mut bits = encoded.compressed.clone();
        bits.pop();
        if let Ok(partial) = huffman_codec::codec::decode(&bits, tree) {
            assert!(partial.len() < input.len());
        }
    }
});
