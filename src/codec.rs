//! Code word assignment, encoding and decoding.
//!
//! Code words are root-to-leaf paths: 0 for a left edge, 1 for a right edge.
//! A tree that is a single leaf has no edges, so its symbol gets the one-bit
//! code word `0`, and the decoder reads each `0` as one occurrence.

use std::collections::HashMap;

use crate::bits::BitString;
use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;
use crate::tree::Node;

/// Mapping from symbol to its code word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: HashMap<u8, BitString>,
}

impl CodeTable {
    /// Derive the code word of every leaf in `root`.
    pub fn from_tree(root: &Node) -> Self {
        let mut codes = HashMap::new();
        match root {
            Node::Leaf { symbol, .. } => {
                let mut code = BitString::new();
                code.push(0);
                codes.insert(*symbol, code);
            }
            Node::Internal { .. } => {
                let mut path = BitString::new();
                Self::build_codes(root, &mut path, &mut codes);
            }
        }
        log::debug!("generated {} code words", codes.len());
        Self { codes }
    }

    fn build_codes(node: &Node, path: &mut BitString, codes: &mut HashMap<u8, BitString>) {
        match node {
            Node::Leaf { symbol, .. } => {
                codes.insert(*symbol, path.clone());
            }
            Node::Internal { left, right, .. } => {
                path.push(0);
                Self::build_codes(left, path, codes);
                path.pop();

                path.push(1);
                Self::build_codes(right, path, codes);
                path.pop();
            }
        }
    }

    /// Code word of `symbol`, if it has one.
    pub fn get(&self, symbol: u8) -> Option<&BitString> {
        self.codes.get(&symbol)
    }

    /// Number of code words.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True if the table has no code words.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// `(symbol, code word)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &BitString)> {
        let mut pairs: Vec<(u8, &BitString)> = self.codes.iter().map(|(&s, c)| (s, c)).collect();
        pairs.sort_unstable_by_key(|&(s, _)| s);
        pairs.into_iter()
    }

    /// Sum of `frequency * code length` over the symbols of `freq`.
    ///
    /// Equals the length of the encoded input `freq` was counted from.
    ///
    /// # Errors
    /// Returns `Error::InvalidSymbol` if `freq` holds a symbol with no code word.
    pub fn weighted_length(&self, freq: &FrequencyTable) -> Result<u64> {
        freq.iter().try_fold(0u64, |acc, (symbol, count)| {
            let code = self.get(symbol).ok_or(Error::InvalidSymbol(symbol))?;
            Ok(acc + count * code.len() as u64)
        })
    }
}

/// Derive the code table of a tree.
pub fn generate_codes(root: &Node) -> CodeTable {
    CodeTable::from_tree(root)
}

/// Concatenate the code words of `input` in order.
///
/// # Errors
/// Returns `Error::InvalidSymbol` for a symbol missing from `codes`.
pub fn encode(input: &[u8], codes: &CodeTable) -> Result<BitString> {
    let mut out = BitString::new();
    for &s in input {
        let code = codes.get(s).ok_or(Error::InvalidSymbol(s))?;
        out.extend_from(code);
    }
    log::debug!("encoded {} symbols into {} bits", input.len(), out.len());
    Ok(out)
}

/// Walk `root` along `data`, emitting a symbol at every leaf.
///
/// # Errors
/// Returns `Error::TruncatedInput` if the bits end inside a code word, and
/// `Error::InvalidBit` for a 1 bit when `root` is a single leaf.
pub fn decode(data: &BitString, root: &Node) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut curr = root;
    let mut trailing = 0;

    for (position, &bit) in data.as_slice().iter().enumerate() {
        match curr {
            Node::Internal { left, right, .. } => {
                curr = if bit == 0 { left } else { right };
            }
            // Only reachable when the root itself is a leaf.
            Node::Leaf { .. } if bit != 0 => {
                log::warn!("bit {bit} at position {position} has no path in a single-leaf tree");
                return Err(Error::InvalidBit {
                    position,
                    value: bit,
                });
            }
            Node::Leaf { .. } => {}
        }
        trailing += 1;

        if let Node::Leaf { symbol, .. } = curr {
            out.push(*symbol);
            curr = root;
            trailing = 0;
        }
    }

    if trailing > 0 {
        log::warn!("bit sequence ends {trailing} bits into a code word");
        return Err(Error::TruncatedInput { trailing });
    }
    log::debug!("decoded {} bits into {} symbols", data.len(), out.len());
    Ok(out)
}
