// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Direct, unoptimised definitions.
//!
//! These follow the mathematical statements literally and are far too slow
//! for searching, but they are easy to trust and serve as the oracle for the
//! cache and the checker.

use crate::word::Symbol;

/// Is `needle` a (not necessarily contiguous) subsequence of `haystack`?
pub fn is_subsequence(needle: &[Symbol], haystack: &[Symbol]) -> bool {
    let mut rest = haystack.iter();
    needle.iter().all(|s| rest.any(|h| h == s))
}

/// The 1-based window `x_i .. x_2i` of `word`.
///
/// # Panics
///
/// Panics if `i == 0` or `2i` exceeds the word length.
pub fn window(word: &[Symbol], i: usize) -> &[Symbol] {
    assert!(i >= 1, "windows are numbered from 1");
    &word[i - 1..2 * i]
}

/// Check every pair of windows.
pub fn is_valid_brute_force(word: &[Symbol]) -> bool {
    let last = word.len() / 2;
    for i in 1..=last {
        for j in i + 1..=last {
            if is_subsequence(window(word, i), window(word, j)) {
                return false;
            }
        }
    }
    true
}

/// Largest `q < position` with `word[q] == symbol`, by linear scan.
pub fn previous_occurrence(word: &[Symbol], symbol: Symbol, position: usize) -> Option<usize> {
    word[..position].iter().rposition(|&s| s == symbol)
}
