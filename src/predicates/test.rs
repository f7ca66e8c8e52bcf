// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Test predicates for validating the search engine.
//!
//! These predicates drive the word directly, without randomness or
//! milestones. They're useful for:
//! - Testing the engine's backtracking logic
//! - Validating that rewinding keeps the word and cache in step
//! - Providing examples for implementing real predicates

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::word::Symbol;

/// Predicate that appends one symbol from a fixed list, in list order.
///
/// Symbols that would break the property fail.
///
/// # Example
///
/// ```
/// use friedman_search::context::{SearchContext, SearchParams};
/// use friedman_search::engine::EngineBuilder;
/// use friedman_search::predicates::SuspendPredicate;
/// use friedman_search::predicates::test::AppendSymbolPredicate;
///
/// let mut ctx = SearchContext::new(SearchParams::new(3, 1, 1).unwrap());
/// let engine = EngineBuilder::new()
///     .add(Box::new(AppendSymbolPredicate::new(vec![2, 1])))
///     .terminal(Box::new(SuspendPredicate))
///     .build();
///
/// assert!(engine.search(&mut ctx).is_some());
/// assert_eq!(ctx.word.to_string(), "2");
/// ```
#[derive(Debug)]
pub struct AppendSymbolPredicate {
    symbols: Vec<Symbol>,
}

impl AppendSymbolPredicate {
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }
}

impl Predicate for AppendSymbolPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        if self.symbols.is_empty() {
            PredicateResult::Failure
        } else {
            PredicateResult::Choices(self.symbols.len())
        }
    }

    fn retry_pred(&mut self, ctx: &mut SearchContext, _round: usize, choice: usize) -> PredicateResult {
        if ctx.push_block(&[self.symbols[choice]]) {
            PredicateResult::Success
        } else {
            PredicateResult::Failure
        }
    }

    fn name(&self) -> &str {
        "AppendSymbol"
    }
}

/// Predicate that succeeds N times using SuccessSamePredicate (for testing rounds).
///
/// - Round 0, 1, ..., N-2: return SuccessSamePredicate
/// - Round N-1: return Success to advance
#[derive(Debug)]
pub struct RepeatPredicate {
    rounds: usize,
}

impl RepeatPredicate {
    /// Create a predicate that executes for `rounds` rounds.
    pub fn new(rounds: usize) -> Self {
        Self { rounds }
    }
}

impl Predicate for RepeatPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, round: usize) -> PredicateResult {
        if round + 1 < self.rounds {
            PredicateResult::SuccessSamePredicate
        } else if round + 1 == self.rounds {
            PredicateResult::Success
        } else {
            PredicateResult::Failure
        }
    }

    fn name(&self) -> &str {
        "Repeat"
    }
}

/// Appends a fixed word, one symbol per round, then hands over.
///
/// Fails if any prefix of the word breaks the property.
#[derive(Debug)]
pub struct FixedWordPredicate {
    symbols: Vec<Symbol>,
}

impl FixedWordPredicate {
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }
}

impl Predicate for FixedWordPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult {
        match self.symbols.get(round) {
            None => PredicateResult::Success,
            Some(&symbol) if ctx.push_block(&[symbol]) => PredicateResult::SuccessSamePredicate,
            Some(_) => PredicateResult::Failure,
        }
    }

    fn name(&self) -> &str {
        "FixedWord"
    }
}
