//! Error types for Huffman coding.

use thiserror::Error;

/// Error variants for Huffman operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// No symbols to build a tree from, or bits to decode without a tree.
    #[error("empty alphabet")]
    EmptyAlphabet,

    /// The symbol has no code word in the code table.
    #[error("symbol {0:#04x} has no code word")]
    InvalidSymbol(u8),

    /// The bit sequence ended in the middle of a code word.
    #[error("truncated input: {trailing} bits after the last complete code word")]
    TruncatedInput {
        /// Bits consumed since the last decoded symbol.
        trailing: usize,
    },

    /// A bit value that does not lead anywhere in the tree.
    #[error("invalid bit {value} at position {position}")]
    InvalidBit {
        /// Index of the offending bit.
        position: usize,
        /// The offending value.
        value: u8,
    },
}

/// A specialized Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, Error>;
