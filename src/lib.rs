// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search for long words with Friedman's block-subsequence property.
//!
//! A word `x_1 .. x_N` over `k` symbols has the property when, for all
//! `i < j <= N/2`, the block `x_i .. x_2i` is not a subsequence of
//! `x_j .. x_2j`. Friedman showed that for each `k` there is a longest such
//! word, of length `n(k)`; `n(1) = 3`, `n(2) = 11`, and `n(3)` is beyond any
//! search. Long words found here witness lower bounds.
//!
//! # Architecture
//!
//! - [`word`]: the word and its previous-occurrence cache, grown a block at a
//!   time and truncated on backtracking
//! - [`validity`]: the linear-time property check, plus brute-force reference
//!   definitions
//! - [`trail`]: word lengths recorded for O(1) backtracking
//! - [`context`]: one value owning all state of a search
//! - [`engine`]: predicate-driven backtracking with an explicit stack
//! - [`predicates`]: the extend step and built-in terminal predicates
//! - [`report`] and [`state`]: milestones, progress and statistics
//!
//! # Search Algorithm
//!
//! Each round appends one block of `B` symbols. All `k^B` blocks are tried,
//! starting from a random block value and wrapping around, so the search is
//! exhaustive while different seeds reach different long words first. A block
//! is kept when the word still has the property; only embeddings the block
//! made possible are looked for.
//!
//! # Example
//!
//! ```
//! use friedman_search::context::{SearchContext, SearchParams, Seed};
//! use friedman_search::predicates::search_program;
//! use friedman_search::report::MilestoneReporter;
//!
//! let mut ctx = SearchContext::new(SearchParams::new(2, 1, 1).unwrap());
//! let engine = search_program(Seed::new(42, 1).rng(), MilestoneReporter::new(Vec::new()), None);
//! assert!(engine.search(&mut ctx).is_none());
//! assert_eq!(ctx.progress.best_length(), 11);
//! ```
//!
//! # References
//!
//! - Friedman, H. (2001). "Long finite sequences." Journal of Combinatorial
//!   Theory, Series A 95, 102-144.

pub mod context;
pub mod engine;
pub mod predicates;
pub mod report;
pub mod state;
pub mod trail;
pub mod validity;
pub mod word;

// Re-export commonly used types
pub use context::SearchContext;
pub use engine::{Predicate, PredicateResult, SearchEngine};
pub use trail::Trail;
pub use word::{OccurrenceCache, Word};
