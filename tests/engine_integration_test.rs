// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the search engine.
//!
//! These tests validate that the engine correctly:
//! - Runs predicates in sequence
//! - Handles Choices and retry_pred correctly
//! - Backtracks on failure and rewinds the word
//! - Supports SuccessSamePredicate for multi-round predicates
//! - Suspends and resumes

mod common;

use common::context;
use friedman_search::engine::EngineBuilder;
use friedman_search::predicates::test::{AppendSymbolPredicate, FixedWordPredicate, RepeatPredicate};
use friedman_search::predicates::{FailPredicate, SuspendPredicate};

#[test]
fn test_single_choice_with_suspend() {
    let mut ctx = context(2, 1, 1);
    let engine = EngineBuilder::new()
        .add(Box::new(AppendSymbolPredicate::new(vec![1, 0])))
        .terminal(Box::new(SuspendPredicate))
        .build();

    let engine = engine.search(&mut ctx).unwrap();
    let (tries, retries) = engine.statistics();
    assert_eq!(tries, 2); // AppendSymbol.try_pred + Suspend.try_pred
    assert_eq!(retries, 1); // AppendSymbol.retry_pred(choice=0)
    assert_eq!(ctx.word.to_string(), "1");
}

#[test]
fn test_backtracking_with_failure() {
    let mut ctx = context(2, 1, 1);
    let engine = EngineBuilder::new()
        .add(Box::new(AppendSymbolPredicate::new(vec![0, 1])))
        .add(Box::new(AppendSymbolPredicate::new(vec![0, 1])))
        .terminal(Box::new(FailPredicate))
        .build();

    assert!(engine.search(&mut ctx).is_none());
    assert!(ctx.word.is_empty());
    assert!(ctx.cache.is_empty());
}

#[test]
fn test_multi_round_predicate() {
    let mut ctx = context(2, 1, 1);
    let engine = EngineBuilder::new()
        .add(Box::new(RepeatPredicate::new(3)))
        .terminal(Box::new(SuspendPredicate))
        .build();

    let engine = engine.search(&mut ctx).unwrap();
    assert_eq!(engine.statistics(), (4, 0)); // Three rounds + Suspend
    assert_eq!(engine.depth(), 4);
}

#[test]
fn test_fixed_word_then_choice() {
    let mut ctx = context(2, 1, 1);
    let engine = EngineBuilder::new()
        .add(Box::new(FixedWordPredicate::new(vec![0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0])))
        .add(Box::new(AppendSymbolPredicate::new(vec![0, 1])))
        .terminal(Box::new(SuspendPredicate))
        .build();

    // Neither twelfth symbol keeps the property.
    assert!(engine.search(&mut ctx).is_none());
    assert!(ctx.word.is_empty());
}

#[test]
fn test_fixed_word_rejects_invalid_prefix() {
    let mut ctx = context(1, 1, 1);
    let engine = EngineBuilder::new()
        .add(Box::new(FixedWordPredicate::new(vec![0, 0, 0, 0, 0])))
        .terminal(Box::new(SuspendPredicate))
        .build();
    assert!(engine.search(&mut ctx).is_none());
}

#[test]
fn test_rewind_between_choices() {
    let mut ctx = context(3, 1, 1);
    let engine = EngineBuilder::new()
        .add(Box::new(FixedWordPredicate::new(vec![2, 2])))
        .add(Box::new(AppendSymbolPredicate::new(vec![0, 1, 2])))
        .terminal(Box::new(SuspendPredicate))
        .build();

    let engine = engine.search(&mut ctx).unwrap();
    assert_eq!(ctx.word.to_string(), "220");
    let engine = engine.search(&mut ctx).unwrap();
    assert_eq!(ctx.word.to_string(), "221");
    let engine = engine.search(&mut ctx).unwrap();
    assert_eq!(ctx.word.to_string(), "222");
    assert!(engine.search(&mut ctx).is_none());
}
