//! Symbol frequency counting.
//!
//! The first stage of the pipeline: one pass over the input, one counter per
//! distinct byte.

use std::collections::HashMap;

/// Mapping from symbol to its number of occurrences in the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<u8, u64>,
}

impl FrequencyTable {
    /// Count every symbol of `input`.
    ///
    /// An empty input yields an empty table.
    pub fn count(input: &[u8]) -> Self {
        let mut counts = HashMap::new();
        for &s in input {
            *counts.entry(s).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Occurrences of `symbol`, or 0 if it never appeared.
    pub fn get(&self, symbol: u8) -> u64 {
        self.counts.get(&symbol).copied().unwrap_or(0)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True if no symbol was counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the input length.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// `(symbol, count)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> {
        let mut pairs: Vec<(u8, u64)> = self.counts.iter().map(|(&s, &f)| (s, f)).collect();
        pairs.sort_unstable_by_key(|&(s, _)| s);
        pairs.into_iter()
    }
}
