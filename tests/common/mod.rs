// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use friedman_search::context::{SearchContext, SearchParams, Seed};
use friedman_search::predicates::search_program;
use friedman_search::report::MilestoneReporter;
use friedman_search::word::Symbol;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A fresh context; panics on invalid parameters.
pub fn context(symbols: usize, block_size: usize, milestone: usize) -> SearchContext {
    SearchContext::new(SearchParams::new(symbols, block_size, milestone).unwrap())
}

pub fn random_word(rng: &mut StdRng, symbols: usize, length: usize) -> Vec<Symbol> {
    (0..length).map(|_| rng.gen_range(0..symbols) as Symbol).collect()
}

pub fn test_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Run the exhaustive search to completion, returning the context and the
/// text the reporter wrote.
pub fn run_exhaustive(symbols: usize, block_size: usize, milestone: usize, seed: u64) -> (SearchContext, String) {
    let mut ctx = context(symbols, block_size, milestone);
    let output = SharedBuffer::default();
    let engine = search_program(
        Seed::new(seed, 1).rng(),
        MilestoneReporter::new(output.clone()),
        None,
    );
    assert!(engine.search(&mut ctx).is_none(), "exhaustive search suspended");
    (ctx, output.contents())
}

/// The `(length, word)` pairs in reporter output, oldest first.
pub fn reported_milestones(output: &str) -> Vec<(usize, String)> {
    let mut lines = output.lines();
    let mut milestones = Vec::new();
    while let Some(header) = lines.next() {
        let length = header
            .strip_prefix("New best with length ")
            .and_then(|n| n.parse().ok())
            .unwrap_or_else(|| panic!("unexpected report line {:?}", header));
        let word = lines.next().and_then(|l| l.strip_prefix("  ")).unwrap();
        milestones.push((length, word.to_string()));
    }
    milestones
}

/// A writer whose contents stay readable after the reporter is moved into
/// the engine.
#[derive(Clone, Default)]
pub struct SharedBuffer(std::rc::Rc<std::cell::RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).unwrap()
    }
}

impl std::io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
