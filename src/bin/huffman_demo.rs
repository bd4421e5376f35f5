use huffman_codec::{decode, encode};

const DEMO_INPUT: &str = "Huffman";

fn main() -> Result<(), huffman_codec::Error> {
    let input = std::env::args().nth(1).unwrap_or_else(|| DEMO_INPUT.to_string());
    let encoded = encode(input.as_bytes())?;

    let codes = encoded
        .codes
        .iter()
        .map(|(symbol, code)| format!("{}: {}", char::from(symbol), code))
        .collect::<Vec<_>>()
        .join(", ");
    println!("Huffman Codes: {codes}");
    println!("Compressed Data: {}", encoded.compressed);
    println!("Original Size: {} bits", encoded.original_bits());
    println!("Compressed Size: {} bits", encoded.compressed_bits());

    let decoded = decode(&encoded.compressed, encoded.tree.as_ref())?;
    println!("Decoded Data: {}", String::from_utf8_lossy(&decoded));
    Ok(())
}
