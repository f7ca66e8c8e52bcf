// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking for the word.
//!
//! The word only changes by appending blocks, so the trail records the word
//! length before each append. Rewinding to a checkpoint yields the length the
//! word had when the checkpoint was taken; the owner truncates the word and
//! its cache to that length.
//!
//! Checkpoints are plain trail lengths, handed out by [`Trail::checkpoint`] and
//! kept by the engine in its stack frames.

/// A single entry in the trail, recording one append.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TrailEntry {
    /// Word length before the append.
    old_length: usize,
}

/// The trail system for O(1) backtracking.
#[derive(Debug, Default)]
pub struct Trail {
    entries: Vec<TrailEntry>,
}

impl Trail {
    /// Create a new empty trail.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current position, to be passed back to [`Trail::rewind_to`].
    pub fn checkpoint(&self) -> usize {
        self.entries.len()
    }

    /// Record that the word is about to grow from `old_length`.
    pub(crate) fn record_append(&mut self, old_length: usize) {
        self.entries.push(TrailEntry { old_length });
    }

    /// Discard all entries recorded since `checkpoint`.
    ///
    /// Returns the word length to restore, or `None` when nothing was
    /// recorded since the checkpoint.
    pub fn rewind_to(&mut self, checkpoint: usize) -> Option<usize> {
        let restored = self.entries.get(checkpoint)?.old_length;
        self.entries.truncate(checkpoint);
        Some(restored)
    }

    /// Get the current number of entries in the trail.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the trail is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
