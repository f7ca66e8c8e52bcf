// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! ExtendPredicate - grows the word one block per round.
//!
//! Round `r` extends a word of `r` blocks. Every one of the `symbols ^
//! block_size` blocks is a choice, tried in cyclic order from a random start
//! drawn once per round, so different seeds find different long words first
//! while the search as a whole stays exhaustive.
//!
//! # Choices
//!
//! Choice `k` in round `r` is the block value `(start_r + k) mod space`,
//! decoded into base-`symbols` digits, least significant first. A block that
//! breaks the property fails; one that keeps it records progress and descends
//! to round `r + 1`.

use std::fmt::Debug;
use std::io::Write;

use rand::Rng;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::report::MilestoneReporter;
use crate::state::Counters;
use crate::word::{decode_block, Symbol};

pub struct ExtendPredicate<R, W: Write> {
    rng: R,
    reporter: MilestoneReporter<W>,
    /// Stop extending once the word has this many symbols.
    target_length: Option<usize>,
    /// Random start of each round on the current path.
    starts: Vec<u64>,
    /// Scratch space for the block being tried.
    block: Vec<Symbol>,
}

impl<R: Rng + Debug, W: Write> ExtendPredicate<R, W> {
    pub fn new(rng: R, reporter: MilestoneReporter<W>) -> Self {
        Self {
            rng,
            reporter,
            target_length: None,
            starts: Vec::new(),
            block: Vec::new(),
        }
    }

    /// Succeed, handing over to the next predicate, once the word reaches
    /// `target` symbols.
    pub fn with_target_length(mut self, target: usize) -> Self {
        self.target_length = Some(target);
        self
    }

    pub fn into_reporter(self) -> MilestoneReporter<W> {
        self.reporter
    }
}

impl<R: Debug, W: Write> Debug for ExtendPredicate<R, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtendPredicate")
            .field("rng", &self.rng)
            .field("reporter", &self.reporter)
            .field("target_length", &self.target_length)
            .field("depth", &self.starts.len())
            .finish()
    }
}

/// `(start + offset) mod space` for `start, offset < space`, without overflow.
fn cyclic(start: u64, offset: u64, space: u64) -> u64 {
    if offset < space - start {
        start + offset
    } else {
        offset - (space - start)
    }
}

impl<R: Rng + Debug, W: Write> Predicate for ExtendPredicate<R, W> {
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult {
        if self.target_length.is_some_and(|target| ctx.word.len() >= target) {
            return PredicateResult::Success;
        }
        let space = ctx.params.block_space();
        self.starts.truncate(round);
        self.starts.push(self.rng.gen_range(0..space));
        PredicateResult::Choices(space as usize)
    }

    fn retry_pred(&mut self, ctx: &mut SearchContext, round: usize, choice: usize) -> PredicateResult {
        let space = ctx.params.block_space();
        let value = cyclic(self.starts[round], choice as u64, space);
        self.block.clear();
        decode_block(value, ctx.params.symbols() as u64, ctx.params.block_size(), &mut self.block);

        ctx.statistics.increment_counter(Counters::BlocksTried);
        if !ctx.push_block(&self.block) {
            ctx.statistics.increment_counter(Counters::BlocksRejected);
            return PredicateResult::Failure;
        }
        ctx.statistics.increment_counter(Counters::BlocksAccepted);

        if let Some(milestone) = ctx.record_progress() {
            tracing::debug!(length = milestone.length, "new milestone");
            self.reporter.report(&ctx.word, milestone.length);
        }
        PredicateResult::SuccessSamePredicate
    }

    fn name(&self) -> &str {
        "Extend"
    }
}
