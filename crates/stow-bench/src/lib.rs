//! Benchmark workloads and utilities for the stow containers.
//!
//! Provides deterministic input generators shared by the criterion
//! benches and the `numerals` example:
//!
//! - [`ascending`]: `0..n` as `u64`
//! - [`words`]: `n` short owned strings with a repeating pattern
//! - [`filled_owner`]: a [`ValueOwner`] pre-loaded with `n` items

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use stow_owner::{Record, ValueOwner};
use stow_stack::CowStack;

/// `0..n` as a vector.
pub fn ascending(n: usize) -> Vec<u64> {
    (0..n as u64).collect()
}

/// `n` owned strings cycling through a fixed vocabulary.
pub fn words(n: usize) -> Vec<String> {
    const VOCAB: [&str; 5] = ["cat", "dog", "llama", "parakeet", "terrapin"];
    (0..n)
        .map(|i| format!("{}-{i}", VOCAB[i % VOCAB.len()]))
        .collect()
}

/// A value owner holding `n` ascending items.
pub fn filled_owner(n: usize) -> ValueOwner<u64> {
    ValueOwner::with_items(
        Record::new("bench", "owner"),
        CowStack::from(ascending(n)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generators_have_requested_length() {
        assert_eq!(ascending(10).len(), 10);
        assert_eq!(words(7).len(), 7);
        assert_eq!(filled_owner(3).count(), 3);
    }

    #[test]
    fn words_are_distinct() {
        let w = words(12);
        assert_eq!(w[0], "cat-0");
        assert_eq!(w[5], "cat-5");
        assert_ne!(w[0], w[5]);
    }
}
