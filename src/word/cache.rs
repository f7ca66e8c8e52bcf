// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Previous-occurrence index over the word.
//!
//! For every symbol `c` and every position `p` of the word, the cache holds the
//! largest `q < p` with `word[q] == c`. The entry at `p` depends only on
//! `word[..p]`, so growing the word by a block never invalidates earlier
//! entries, and shrinking it only requires truncation.
//!
//! # Cost
//!
//! [`OccurrenceCache::rebuild`] touches only the `block_size` new positions of
//! each symbol's sequence, so each appended symbol costs O(symbols) regardless
//! of the word length.

use super::Symbol;

/// Stored in place of a position when the symbol has not occurred yet.
const NONE: u32 = u32::MAX;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccurrenceCache {
    /// `prev[c][p]`: previous position of symbol `c` before `p`, or `NONE`.
    prev: Vec<Vec<u32>>,
}

impl OccurrenceCache {
    /// An empty cache for an alphabet of `symbols` letters.
    pub fn new(symbols: usize) -> Self {
        Self {
            prev: vec![Vec::new(); symbols],
        }
    }

    /// Build the cache for a whole word in one pass.
    pub fn from_word(word: &[Symbol], symbols: usize) -> Self {
        let mut cache = Self::new(symbols);
        cache.rebuild(word, word.len());
        cache
    }

    /// Alphabet size this cache was built for.
    pub fn symbols(&self) -> usize {
        self.prev.len()
    }

    /// Number of word positions covered.
    pub fn len(&self) -> usize {
        self.prev.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest position `q < position` holding `symbol`.
    #[inline]
    pub fn previous(&self, symbol: Symbol, position: usize) -> Option<usize> {
        match self.prev[symbol as usize][position] {
            NONE => None,
            q => Some(q as usize),
        }
    }

    /// Forget every position at or past `len`.
    pub fn truncate(&mut self, len: usize) {
        for seq in &mut self.prev {
            seq.truncate(len);
        }
    }

    /// Bring the cache in line with `word` after a block of `block_size`
    /// symbols has been appended.
    ///
    /// The cache must already be valid for `word[..word.len() - block_size]`.
    /// Stale entries past that prefix (left over from a block that has since
    /// been removed) are discarded before the new positions are filled in.
    ///
    /// # Panics
    ///
    /// Panics if the cache does not cover the retained prefix, if
    /// `block_size` exceeds the word length, or if the word is too long for
    /// 32-bit positions.
    pub fn rebuild(&mut self, word: &[Symbol], block_size: usize) {
        let length = word.len();
        assert!(
            block_size <= length,
            "block of {} symbols does not fit a word of length {}",
            block_size,
            length
        );
        assert!(length < NONE as usize, "word of length {} exceeds cache positions", length);
        let tail = length - block_size;
        assert!(
            self.len() >= tail,
            "cache covers {} positions but the word prefix has {}",
            self.len(),
            tail
        );

        for (c, seq) in self.prev.iter_mut().enumerate() {
            seq.truncate(tail);
            let mut last = match tail.checked_sub(1) {
                None => NONE,
                Some(p) if word[p] as usize == c => p as u32,
                Some(p) => seq[p],
            };
            for (p, &symbol) in word.iter().enumerate().skip(tail) {
                seq.push(last);
                if symbol as usize == c {
                    last = p as u32;
                }
            }
        }
    }
}
