// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! # Organization
//!
//! - `extend`: ExtendPredicate, one block per round
//! - `test`: Simple predicates for exercising the engine
//! - Built-in terminal predicates: `FailPredicate`, `SuspendPredicate`
//!
//! [`search_program`] assembles the two programs the search runs: an
//! exhaustive one ending in `FailPredicate`, and a witness hunt ending in
//! `SuspendPredicate`.

pub mod extend;
pub mod test;

pub use extend::ExtendPredicate;

use std::fmt::Debug;
use std::io::Write;

use rand::Rng;

use crate::context::SearchContext;
use crate::engine::{EngineBuilder, Predicate, PredicateResult, SearchEngine, TerminalPredicate};
use crate::report::MilestoneReporter;

/// Built-in fail predicate (Prolog's `fail.`).
///
/// Ending a program with it makes the engine explore every alternative.
///
/// # Example
///
/// ```
/// use friedman_search::context::{SearchContext, SearchParams};
/// use friedman_search::engine::EngineBuilder;
/// use friedman_search::predicates::FailPredicate;
/// use friedman_search::predicates::test::AppendSymbolPredicate;
///
/// let mut ctx = SearchContext::new(SearchParams::new(2, 1, 1).unwrap());
/// let engine = EngineBuilder::new()
///     .add(Box::new(AppendSymbolPredicate::new(vec![0, 1])))
///     .terminal(Box::new(FailPredicate))
///     .build();
///
/// // Engine will exhaust all choices then fail
/// assert!(engine.search(&mut ctx).is_none());
/// ```
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

impl TerminalPredicate for FailPredicate {}

/// Built-in suspend predicate.
///
/// Returns control to the caller with the context as it is; the engine can
/// then be resumed for the next solution.
#[derive(Debug)]
pub struct SuspendPredicate;

impl Predicate for SuspendPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Suspend
    }

    fn name(&self) -> &str {
        "Suspend"
    }
}

impl TerminalPredicate for SuspendPredicate {}

/// The block search as an engine program.
///
/// Without a target the program explores the whole tree, reporting
/// milestones as it goes. With a target it suspends at every word of at least
/// `target` symbols.
pub fn search_program<R, W>(rng: R, reporter: MilestoneReporter<W>, target: Option<usize>) -> SearchEngine
where
    R: Rng + Debug + 'static,
    W: Write + 'static,
{
    let extend = ExtendPredicate::new(rng, reporter);
    match target {
        None => EngineBuilder::new()
            .add(Box::new(extend))
            .terminal(Box::new(FailPredicate))
            .build(),
        Some(target) => EngineBuilder::new()
            .add(Box::new(extend.with_target_length(target)))
            .terminal(Box::new(SuspendPredicate))
            .build(),
    }
}
