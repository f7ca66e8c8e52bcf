// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Friedman's block-subsequence property.
//!
//! Number word positions from 1. For `1 <= i < j` with `2j <= N`, the window
//! `x_i .. x_2i` must not be a subsequence of `x_j .. x_2j`. In 0-based storage
//! the window of `i` covers positions `i-1 ..= 2i-1`.
//!
//! # Algorithm
//!
//! For each outer window (0-based start `start`, last position `2*start + 1`)
//! the checker looks for an embedding by its last matched position `jlast`,
//! walking the occurrences of the window's last symbol backward from the last
//! position covered by any window. For a given `jlast` the widest usable
//! window starts at `max(start + 1, jlast / 2)`, so a greedy backward match
//! through the [`OccurrenceCache`] decides whether some window contains an
//! embedding ending there.
//!
//! A search step only needs embeddings that the last block made possible. A
//! word of length `L` has windows ending at most at `2 * (L / 2) - 1`, so after
//! growing to `N` only end positions from [`recheck_from`] onward can be new.
//! For single-symbol blocks this is one position before the block when `N` is
//! even: the window that just came into existence may embed without using the
//! new symbol.
//!
//! The [`reference`] module holds the direct quadratic definitions used to
//! cross-check this module.

pub mod reference;

use crate::word::{OccurrenceCache, Symbol};

/// First end position an embedding must reach to be new after the word grew
/// from `length - block_size` to `length`.
pub fn recheck_from(length: usize, block_size: usize) -> usize {
    length.saturating_sub(block_size) & !1
}

/// Does `word` have the property, considering only embeddings that end at or
/// after `from`?
///
/// With `from == 0` this is a complete check.
///
/// # Panics
///
/// Panics if `cache` does not cover exactly the positions of `word`.
pub fn is_valid(word: &[Symbol], cache: &OccurrenceCache, from: usize) -> bool {
    let length = word.len();
    assert_eq!(
        cache.len(),
        length,
        "occurrence cache is out of step with the word"
    );
    if length < 4 {
        return true;
    }
    let end = (length & !1) - 1;
    if from > end {
        return true;
    }
    !(0..=(length - 4) / 2).any(|start| embeds_later(word, cache, start, end, from))
}

/// Check a word whose prefix without the last `block_size` symbols is known
/// to have the property.
pub fn is_valid_extension(word: &[Symbol], cache: &OccurrenceCache, block_size: usize) -> bool {
    is_valid(word, cache, recheck_from(word.len(), block_size))
}

/// Does the window starting at `start` embed into a later window, with its
/// last symbol matched somewhere in `from..=end`?
fn embeds_later(
    word: &[Symbol],
    cache: &OccurrenceCache,
    start: usize,
    end: usize,
    from: usize,
) -> bool {
    let top = 2 * start + 1;
    let last = word[top];
    let mut jlast = if word[end] == last {
        Some(end)
    } else {
        cache.previous(last, end)
    };
    while let Some(candidate) = jlast {
        if candidate < from {
            break;
        }
        let floor = (start + 1).max(candidate / 2);
        if matches_backward(&word[start..top], cache, candidate, floor) {
            return true;
        }
        jlast = cache.previous(last, candidate);
    }
    false
}

/// Greedily match `prefix` right to left at positions before `candidate`,
/// never going below `floor`.
#[inline]
fn matches_backward(prefix: &[Symbol], cache: &OccurrenceCache, candidate: usize, floor: usize) -> bool {
    let mut j = candidate;
    for &symbol in prefix.iter().rev() {
        match cache.previous(symbol, j) {
            Some(p) if p >= floor => j = p,
            _ => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::Word;

    fn check(text: &str, symbols: usize) -> bool {
        let word: Word = text.parse().unwrap();
        let cache = OccurrenceCache::from_word(word.as_slice(), symbols);
        is_valid(word.as_slice(), &cache, 0)
    }

    #[test]
    fn test_short_words_are_valid() {
        assert!(check("", 1));
        assert!(check("0", 1));
        assert!(check("000", 1));
        assert!(check("101", 2));
    }

    #[test]
    fn test_unary_limit() {
        assert!(check("000", 1));
        assert!(!check("0000", 1));
    }

    #[test]
    fn test_binary_witness() {
        assert!(check("01110000000", 2));
        assert!(!check("011100000000", 2));
        assert!(!check("011100000001", 2));
    }

    #[test]
    fn test_odd_tail_is_outside_every_window() {
        // "01" embeds into positions 2..=4, but the window ending at
        // position 4 would need length 6.
        assert!(check("01001", 2));
        assert!(!check("010010", 2));
    }

    #[test]
    fn test_recheck_from() {
        assert_eq!(recheck_from(4, 1), 2);
        assert_eq!(recheck_from(5, 1), 4);
        assert_eq!(recheck_from(6, 2), 4);
        assert_eq!(recheck_from(6, 3), 2);
        assert_eq!(recheck_from(2, 3), 0);
    }

    #[test]
    fn test_extension_check_matches_full_check() {
        let word: Word = "0111000000".parse().unwrap();
        let cache = OccurrenceCache::from_word(word.as_slice(), 2);
        assert_eq!(
            is_valid_extension(word.as_slice(), &cache, 1),
            is_valid(word.as_slice(), &cache, 0)
        );
    }

    #[test]
    #[should_panic(expected = "out of step")]
    fn test_stale_cache_panics() {
        let cache = OccurrenceCache::from_word(&[0, 1], 2);
        is_valid(&[0, 1, 0, 1], &cache, 0);
    }
}
