//! Sequence Complexity
//!
//! Lempel-Ziv complexity counts the distinct phrases produced by a greedy
//! left-to-right parse: starting at the current position, the candidate
//! phrase is extended one symbol at a time until it has not been seen
//! before; it is then added to the dictionary and parsing resumes after it.
//!
//! ```text
//! 1 | 0 | 01 | 11 | 10 | 110 | 00 | 010   → 8
//! ```
//!
//! Low-complexity regions (repeats, compositional bias) produce few long
//! phrases; diverse sequences produce many short ones.

use std::collections::HashSet;

/// A deterministic complexity score over a sequence string
pub trait ComplexityMetric {
    /// Short name used in reports
    fn name(&self) -> &'static str;

    /// Score a sequence. Must be a pure function of `sequence`.
    fn score(&self, sequence: &str) -> u64;
}

/// Lempel-Ziv phrase count
#[derive(Debug, Clone, Copy, Default)]
pub struct LempelZiv;

impl ComplexityMetric for LempelZiv {
    fn name(&self) -> &'static str {
        "lempel-ziv"
    }

    fn score(&self, sequence: &str) -> u64 {
        lempel_ziv_complexity(sequence)
    }
}

/// Compute the Lempel-Ziv complexity of `sequence`.
///
/// A trailing candidate phrase that is already in the dictionary when the
/// input runs out is not counted.
pub fn lempel_ziv_complexity(sequence: &str) -> u64 {
    let symbols: Vec<char> = sequence.chars().collect();
    let n = symbols.len();
    let mut phrases: HashSet<&[char]> = HashSet::new();

    let mut start = 0;
    let mut width = 1;
    while start + width <= n {
        let phrase = &symbols[start..start + width];
        if phrases.contains(phrase) {
            width += 1;
        } else {
            phrases.insert(phrase);
            start += width;
            width = 1;
        }
    }

    phrases.len() as u64
}
