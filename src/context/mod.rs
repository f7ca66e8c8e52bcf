// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context owning all state of one search.
//!
//! The context groups what the search mutates:
//! - the word and its occurrence cache, kept in step by [`SearchContext::push_block`]
//!   and [`SearchContext::rewind_to`]
//! - the trail recording appends for backtracking
//! - progress (best length, milestones) and statistics, which are never rewound
//!
//! Nothing here is global, so independent searches can run side by side.
//!
//! # Example
//!
//! ```
//! use friedman_search::context::{SearchContext, SearchParams};
//!
//! let mut ctx = SearchContext::new(SearchParams::new(2, 1, 1).unwrap());
//! let checkpoint = ctx.trail.checkpoint();
//! assert!(ctx.push_block(&[0]));
//! assert_eq!(ctx.word.len(), 1);
//!
//! ctx.rewind_to(checkpoint);
//! assert!(ctx.word.is_empty());
//! ```

pub mod params;

pub use params::{ConfigError, SearchParams, Seed};

use crate::state::{Counters, Milestone, Progress, Statistics};
use crate::trail::Trail;
use crate::validity;
use crate::word::{OccurrenceCache, Symbol, Word};

#[derive(Debug)]
pub struct SearchContext {
    pub params: SearchParams,
    /// The current word. Modify only through the context so the cache and
    /// trail stay in step.
    pub word: Word,
    pub cache: OccurrenceCache,
    pub trail: Trail,
    pub progress: Progress,
    pub statistics: Statistics,
}

impl SearchContext {
    /// A context with an empty word.
    pub fn new(params: SearchParams) -> Self {
        Self {
            word: Word::new(),
            cache: OccurrenceCache::new(params.symbols()),
            trail: Trail::new(),
            progress: Progress::new(params.milestone()),
            statistics: Statistics::new(),
            params,
        }
    }

    /// Append `block`, recording the append on the trail, and report whether
    /// the word still has the property.
    ///
    /// The word before the append is assumed to have the property; only
    /// embeddings made possible by the new block are looked for.
    pub fn push_block(&mut self, block: &[Symbol]) -> bool {
        self.trail.record_append(self.word.len());
        self.word.push_block(block);
        self.cache.rebuild(self.word.as_slice(), block.len());
        validity::is_valid_extension(self.word.as_slice(), &self.cache, block.len())
    }

    /// Undo every append made since `checkpoint`.
    pub fn rewind_to(&mut self, checkpoint: usize) {
        if let Some(length) = self.trail.rewind_to(checkpoint) {
            self.word.truncate(length);
            self.cache.truncate(length);
        }
    }

    /// Full check of the current word, ignoring what is known about prefixes.
    pub fn is_valid(&self) -> bool {
        validity::is_valid(self.word.as_slice(), &self.cache, 0)
    }

    /// Record the current word's length with progress and statistics.
    ///
    /// Returns the milestone if one was crossed.
    pub fn record_progress(&mut self) -> Option<Milestone> {
        let (record, milestone) = self.progress.record(&self.word);
        if record {
            self.statistics.increment_counter(Counters::Records);
        }
        if milestone.is_some() {
            self.statistics.increment_counter(Counters::Milestones);
        }
        milestone
    }
}
