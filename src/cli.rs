// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "friedman")]
#[command(version, about = "Search for long words with Friedman's block-subsequence property")]
pub struct Cli {
    /// Number of symbols in the alphabet
    #[arg(short, long, default_value_t = 2)]
    pub symbols: usize,

    /// Number of symbols to try at a time
    #[arg(short, long, default_value_t = 1)]
    pub block_size: usize,

    /// Minimum growth of the best length between reports
    #[arg(short, long, default_value_t = 1)]
    pub milestone: usize,

    /// First word of the random seed (random if omitted)
    #[arg(long, env = "FRIEDMAN_SEED")]
    pub seed: Option<u64>,

    /// Second word of the random seed
    #[arg(long, default_value_t = 1)]
    pub seed_hi: u64,

    /// Stop at a word of at least this length instead of searching forever
    #[arg(short, long)]
    pub target_length: Option<usize>,

    /// With a target length, how many witnesses to print
    #[arg(short, long, default_value_t = 1)]
    pub witnesses: usize,
}
