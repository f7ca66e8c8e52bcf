// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The word under construction and its symbol encoding.
//!
//! The word is the search frontier: it only ever grows by a whole block at the
//! end, and shrinks back by truncation when the engine rewinds the trail.
//!
//! Words render with `0`-`9` then `A`-`Z`, so alphabets of up to 36 symbols
//! print unambiguously. Larger symbols render as `?`.

pub mod cache;

pub use cache::OccurrenceCache;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A single letter of the alphabet, in `0..symbols`.
pub type Symbol = u8;

/// Largest alphabet a [`Symbol`] can index.
pub const MAX_SYMBOLS: usize = Symbol::MAX as usize + 1;

/// Character printed for symbols that have no digit or letter.
pub const PLACEHOLDER: char = '?';

/// Render one symbol: digits, then uppercase letters, then the placeholder.
pub fn symbol_char(symbol: Symbol) -> char {
    match symbol {
        0..=9 => char::from(b'0' + symbol),
        10..=35 => char::from(b'A' + (symbol - 10)),
        _ => PLACEHOLDER,
    }
}

/// Inverse of [`symbol_char`] for the printable range.
pub fn char_symbol(ch: char) -> Option<Symbol> {
    match ch {
        '0'..='9' => Some(ch as u8 - b'0'),
        'A'..='Z' => Some(ch as u8 - b'A' + 10),
        _ => None,
    }
}

/// Render a run of symbols.
pub fn render(symbols: &[Symbol]) -> String {
    symbols.iter().map(|&s| symbol_char(s)).collect()
}

/// Decode `value` into `block_size` base-`symbols` digits, least significant
/// digit first, appending them to `out`.
///
/// ```
/// use friedman_search::word::decode_block;
///
/// let mut block = Vec::new();
/// decode_block(6, 2, 3, &mut block);
/// assert_eq!(block, vec![0, 1, 1]);
/// ```
pub fn decode_block(mut value: u64, symbols: u64, block_size: usize, out: &mut Vec<Symbol>) {
    for _ in 0..block_size {
        out.push((value % symbols) as Symbol);
        value /= symbols;
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseWordError {
    #[error("invalid symbol {ch:?} at position {position}")]
    InvalidSymbol { ch: char, position: usize },
}

/// The string being searched over.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Word {
    symbols: Vec<Symbol>,
}

impl Word {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_symbols(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn as_slice(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Append a block at the end.
    pub fn push_block(&mut self, block: &[Symbol]) {
        self.symbols.extend_from_slice(block);
    }

    /// Drop everything past `len`.
    pub fn truncate(&mut self, len: usize) {
        self.symbols.truncate(len);
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &symbol in &self.symbols {
            write!(f, "{}", symbol_char(symbol))?;
        }
        Ok(())
    }
}

impl FromStr for Word {
    type Err = ParseWordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols = s
            .chars()
            .enumerate()
            .map(|(position, ch)| char_symbol(ch).ok_or(ParseWordError::InvalidSymbol { ch, position }))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { symbols })
    }
}
