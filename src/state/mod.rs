// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search progress: best length so far and the milestones reported.
//!
//! Unlike the word and its cache, progress is never rewound. Both lengths only
//! grow for the lifetime of a search. Only lengths are kept; the word itself is
//! rendered once, by the reporter, when a milestone is crossed.

pub mod statistics;

pub use statistics::{Counters, Statistics};

use crate::word::Word;

/// A reported record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub length: usize,
}

#[derive(Debug)]
pub struct Progress {
    milestone_size: usize,
    best_length: usize,
    last_milestone: usize,
    milestone_count: usize,
}

impl Progress {
    /// Track records, reporting once the best length has grown by at least
    /// `milestone_size` since the last report.
    pub fn new(milestone_size: usize) -> Self {
        Self {
            milestone_size,
            best_length: 0,
            last_milestone: 0,
            milestone_count: 0,
        }
    }

    pub fn best_length(&self) -> usize {
        self.best_length
    }

    pub fn last_milestone(&self) -> usize {
        self.last_milestone
    }

    pub fn milestone_count(&self) -> usize {
        self.milestone_count
    }

    /// Note that `word` has the property.
    ///
    /// Returns whether `word` set a new record, and the milestone if the
    /// record crossed the reporting threshold.
    pub fn record(&mut self, word: &Word) -> (bool, Option<Milestone>) {
        let length = word.len();
        if length <= self.best_length {
            return (false, None);
        }
        self.best_length = length;
        if self.best_length - self.last_milestone < self.milestone_size {
            return (true, None);
        }
        self.last_milestone = self.best_length;
        self.milestone_count += 1;
        (true, Some(Milestone { length }))
    }
}
