//! # Huffman Coding
//!
//! *Optimal prefix codes from observed symbol frequencies.*
//!
//! ## Intuition First
//!
//! Frequent symbols should get short code words, rare ones long code words.
//! Huffman's greedy construction makes that precise: keep joining the two
//! rarest subtrees until one tree remains. Every symbol sits at a leaf, so
//! reading a path from the root always ends exactly at one symbol and no code
//! word can be the prefix of another.
//!
//! ## Pipeline
//!
//! ```text
//! input bytes -> FrequencyTable -> tree root -> CodeTable -> BitString
//!                                      |                        |
//!                                      +------- decode <--------+
//! ```
//!
//! ## Complexity Analysis
//!
//! - **Tree construction**: $O(n \log n)$ in the number $n$ of distinct
//!   symbols, via a binary heap.
//! - **Encode**: $O(m)$ table lookups for an input of $m$ symbols.
//! - **Decode**: $O(b)$ tree steps for $b$ compressed bits.
//!
//! ## Failure Modes
//!
//! 1. **Empty input**: there is no tree. [`encode`] returns empty output with
//!    `tree: None` instead of failing.
//! 2. **Single symbol**: the root is a leaf with no path; its code word is `0`.
//! 3. **Malformed bits**: a bit sequence that stops inside a code word is
//!    reported as [`Error::TruncatedInput`].
//!
//! ## Example
//!
//! ```
//! let encoded = huffman_codec::encode(b"Huffman")?;
//! assert_eq!(encoded.compressed_bits(), 18);
//!
//! let decoded = huffman_codec::decode(&encoded.compressed, encoded.tree.as_ref())?;
//! assert_eq!(decoded, b"Huffman");
//! # Ok::<(), huffman_codec::Error>(())
//! ```
//!
//! ## References
//!
//! - Huffman, D. A. (1952). "A Method for the Construction of Minimum-Redundancy Codes."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bits;
pub mod codec;
pub mod error;
pub mod frequency;
pub mod tree;

pub use bits::BitString;
pub use codec::{generate_codes, CodeTable};
pub use error::{Error, Result};
pub use frequency::FrequencyTable;
pub use tree::{build_tree, Node};

/// Everything produced by [`encode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    /// Concatenated code words of the input.
    pub compressed: BitString,
    /// Code word of every input symbol.
    pub codes: CodeTable,
    /// Tree the codes were derived from; `None` for empty input.
    pub tree: Option<Node>,
    original_len: usize,
}

impl Encoded {
    /// Size of the input in bits, 8 per symbol.
    pub fn original_bits(&self) -> usize {
        self.original_len * 8
    }

    /// Size of the compressed output in bits.
    pub fn compressed_bits(&self) -> usize {
        self.compressed.len()
    }
}

/// Count, build the tree, derive codes and encode `text`.
///
/// Empty input short-circuits to empty output, an empty code table and no tree.
///
/// # Errors
/// Only internal inconsistencies between the code table and the input.
pub fn encode(text: &[u8]) -> Result<Encoded> {
    let freq = FrequencyTable::count(text);
    log::trace!("frequency table: {:?}", freq);

    if freq.is_empty() {
        return Ok(Encoded {
            compressed: BitString::new(),
            codes: CodeTable::default(),
            tree: None,
            original_len: 0,
        });
    }

    let tree = build_tree(&freq)?;
    let codes = generate_codes(&tree);
    let compressed = codec::encode(text, &codes)?;
    Ok(Encoded {
        compressed,
        codes,
        tree: Some(tree),
        original_len: text.len(),
    })
}

/// Decode `compressed` by walking `tree`.
///
/// With no tree, only empty input is accepted and decodes to nothing.
///
/// # Errors
/// Returns `Error::EmptyAlphabet` for bits without a tree, and whatever
/// [`codec::decode`] reports for malformed bits.
pub fn decode(compressed: &BitString, tree: Option<&Node>) -> Result<Vec<u8>> {
    match tree {
        Some(root) => codec::decode(compressed, root),
        None if compressed.is_empty() => Ok(Vec::new()),
        None => Err(Error::EmptyAlphabet),
    }
}
