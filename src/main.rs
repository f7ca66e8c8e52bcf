// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line driver for the block-subsequence search.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use friedman_search::context::{SearchContext, SearchParams, Seed};
use friedman_search::predicates::search_program;
use friedman_search::report::MilestoneReporter;

mod cli;

use cli::Cli;

/// `RUST_LOG` directives when present and well formed, `info` otherwise.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref()))
        .init();

    let cli = Cli::parse();

    let params = SearchParams::new(cli.symbols, cli.block_size, cli.milestone)
        .context("invalid search parameters")?;
    let seed = Seed::new(cli.seed.unwrap_or_else(rand::random), cli.seed_hi);
    tracing::info!(
        symbols = params.symbols(),
        block_size = params.block_size(),
        milestone = params.milestone(),
        seed = seed.lo,
        seed_hi = seed.hi,
        "computing sequences"
    );

    let mut ctx = SearchContext::new(params);
    let engine = search_program(seed.rng(), MilestoneReporter::stdout(), cli.target_length);

    match cli.target_length {
        None => {
            if engine.search(&mut ctx).is_none() {
                println!("Exhaustive search completed");
            }
        }
        Some(target) => {
            let mut engine = Some(engine);
            let mut found = 0;
            while found < cli.witnesses {
                let Some(suspended) = engine.take().and_then(|e| e.search(&mut ctx)) else {
                    break;
                };
                found += 1;
                let mut out = io::stdout().lock();
                writeln!(out, "Witness {} with length {}", found, ctx.word.len())
                    .context("could not write witness")?;
                writeln!(out, "  {}", ctx.word).context("could not write witness")?;
                engine = Some(suspended);
            }
            if found < cli.witnesses {
                tracing::info!(target_length = target, found, "search exhausted before enough witnesses were found");
                println!("Exhaustive search completed");
            }
        }
    }

    tracing::info!(
        best_length = ctx.progress.best_length(),
        milestones = ctx.progress.milestone_count(),
        "search finished"
    );
    for (name, value) in ctx.statistics.iter() {
        tracing::info!("{}: {}", name, value);
    }
    Ok(())
}
