//! Huffman tree construction.
//!
//! Greedy bottom-up merge: the two lightest nodes are repeatedly joined under
//! a new internal node until a single root remains.
//!
//! # Tie-breaking
//!
//! Leaves enter the queue in ascending symbol order and every queued node
//! gets a sequence number. Among equal frequencies the older node is popped
//! first, so the same table always builds the same tree. The total encoded
//! length does not depend on this order, only the individual code words do.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;

/// Huffman tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A symbol and its frequency.
    Leaf {
        /// The symbol.
        symbol: u8,
        /// Occurrences of the symbol.
        freq: u64,
    },
    /// Two owned subtrees; `freq` is the sum of theirs.
    Internal {
        /// Subtree reached by a 0 bit.
        left: Box<Node>,
        /// Subtree reached by a 1 bit.
        right: Box<Node>,
        /// Combined frequency.
        freq: u64,
    },
}

impl Node {
    /// Frequency of this node.
    pub fn freq(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } => *freq,
            Node::Internal { freq, .. } => *freq,
        }
    }

    /// True for `Node::Leaf`.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// The symbol of a leaf, `None` for internal nodes.
    pub fn symbol(&self) -> Option<u8> {
        match self {
            Node::Leaf { symbol, .. } => Some(*symbol),
            Node::Internal { .. } => None,
        }
    }

    /// Number of leaves below (and including) this node.
    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    fn merge(left: Node, right: Node) -> Node {
        let freq = left.freq() + right.freq();
        Node::Internal {
            left: Box::new(left),
            right: Box::new(right),
            freq,
        }
    }
}

/// Queue entry: a node plus the sequence number used to break ties.
struct Pending {
    seq: usize,
    node: Node,
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Pending {}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-priority queue: lowest frequency, then oldest entry, on top.
        other
            .node
            .freq()
            .cmp(&self.node.freq())
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Build a Huffman tree from symbol frequencies.
///
/// A single distinct symbol yields a lone leaf as root.
///
/// # Errors
/// Returns `Error::EmptyAlphabet` if `freq` has no symbols.
pub fn build_tree(freq: &FrequencyTable) -> Result<Node> {
    let mut pq: BinaryHeap<Pending> = freq
        .iter()
        .enumerate()
        .map(|(seq, (symbol, freq))| Pending {
            seq,
            node: Node::Leaf { symbol, freq },
        })
        .collect();
    let mut next_seq = pq.len();

    let root = loop {
        let left = pq.pop().ok_or(Error::EmptyAlphabet)?;
        let Some(right) = pq.pop() else {
            break left.node;
        };
        pq.push(Pending {
            seq: next_seq,
            node: Node::merge(left.node, right.node),
        });
        next_seq += 1;
    };

    log::trace!("huffman tree: {:?}", root);
    log::debug!(
        "built tree over {} symbols, total weight {}",
        root.leaf_count(),
        root.freq()
    );
    Ok(root)
}
