// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search parameters and random seed.

use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::word::MAX_SYMBOLS;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("alphabet must have at least one symbol")]
    NoSymbols,

    #[error("alphabet of {0} symbols exceeds the maximum of {max}", max = MAX_SYMBOLS)]
    TooManySymbols(usize),

    #[error("block size must be at least 1")]
    EmptyBlock,

    #[error("milestone size must be at least 1")]
    ZeroMilestone,

    #[error("{symbols}^{block_size} blocks do not fit in 64 bits")]
    BlockSpaceOverflow { symbols: usize, block_size: usize },
}

/// Alphabet size, block size and reporting threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    symbols: usize,
    block_size: usize,
    milestone: usize,
    block_space: u64,
}

impl SearchParams {
    pub fn new(symbols: usize, block_size: usize, milestone: usize) -> Result<Self, ConfigError> {
        if symbols == 0 {
            return Err(ConfigError::NoSymbols);
        }
        if symbols > MAX_SYMBOLS {
            return Err(ConfigError::TooManySymbols(symbols));
        }
        if block_size == 0 {
            return Err(ConfigError::EmptyBlock);
        }
        if milestone == 0 {
            return Err(ConfigError::ZeroMilestone);
        }
        let block_space = u32::try_from(block_size)
            .ok()
            .and_then(|exp| (symbols as u64).checked_pow(exp))
            .filter(|&space| usize::try_from(space).is_ok())
            .ok_or(ConfigError::BlockSpaceOverflow { symbols, block_size })?;
        Ok(Self {
            symbols,
            block_size,
            milestone,
            block_space,
        })
    }

    pub fn symbols(&self) -> usize {
        self.symbols
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn milestone(&self) -> usize {
        self.milestone
    }

    /// Number of distinct blocks, `symbols ^ block_size`.
    pub fn block_space(&self) -> u64 {
        self.block_space
    }
}

/// Two 64-bit words seeding the random source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seed {
    pub lo: u64,
    pub hi: u64,
}

impl Seed {
    pub fn new(lo: u64, hi: u64) -> Self {
        Self { lo, hi }
    }

    /// Generator whose seed starts with `lo` then `hi`, little-endian.
    pub fn rng(&self) -> StdRng {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&self.lo.to_le_bytes());
        bytes[8..16].copy_from_slice(&self.hi.to_le_bytes());
        StdRng::from_seed(bytes)
    }
}
