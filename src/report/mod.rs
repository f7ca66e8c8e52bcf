// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Milestone reporting.
//!
//! Each report is two lines:
//!
//! ```text
//! New best with length 11
//!   01110000000
//! ```

use std::fmt;
use std::io::{self, Write};

use crate::word::{render, Word};

/// Writes milestone reports, by default to standard output.
pub struct MilestoneReporter<W: Write = io::Stdout> {
    out: W,
    failed: bool,
}

impl MilestoneReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> MilestoneReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, failed: false }
    }

    /// Report `word` as a new best of `length` symbols.
    ///
    /// The search must not stop because its output went away, so write
    /// errors are logged once and otherwise ignored.
    pub fn report(&mut self, word: &Word, length: usize) {
        if let Err(err) = self.write_report(word, length) {
            if !self.failed {
                tracing::warn!("could not write milestone report: {}", err);
                self.failed = true;
            }
        }
    }

    fn write_report(&mut self, word: &Word, length: usize) -> io::Result<()> {
        writeln!(self.out, "New best with length {}", length)?;
        writeln!(self.out, "  {}", render(word.as_slice()))?;
        self.out.flush()
    }

    /// Give back the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> fmt::Debug for MilestoneReporter<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MilestoneReporter")
            .field("failed", &self.failed)
            .finish_non_exhaustive()
    }
}
