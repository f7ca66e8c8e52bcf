// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the context and incremented by the extend
//! predicate as it tries blocks.

use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(EnumCountMacro, EnumIter, IntoStaticStr, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    BlocksTried,
    BlocksRejected,
    BlocksAccepted,
    Records,
    Milestones,
}

#[derive(Debug, Default)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Every counter with its name, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u64)> + '_ {
        Counters::iter().map(|counter| (counter.into(), self.get(counter)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let stats = Statistics::new();
        assert!(stats.iter().all(|(_, value)| value == 0));
        assert_eq!(stats.iter().count(), Counters::COUNT);
    }

    #[test]
    fn test_increment() {
        let mut stats = Statistics::new();
        stats.increment_counter(Counters::BlocksTried);
        stats.increment_counter(Counters::BlocksTried);
        stats.increment_counter(Counters::Milestones);
        assert_eq!(stats.get(Counters::BlocksTried), 2);
        assert_eq!(stats.get(Counters::Milestones), 1);
        assert_eq!(stats.get(Counters::BlocksRejected), 0);
        let names: Vec<_> = stats.iter().map(|(name, _)| name).collect();
        assert_eq!(names[0], "BlocksTried");
    }
}
