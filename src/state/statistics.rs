// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are owned by each solver and reset at the start of every solve.

use std::fmt;

use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(Debug, EnumCountMacro, EnumIter, IntoStaticStr, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Queens recorded with +1.
    Placements,
    /// Queens recorded with -1.
    Removals,
    /// Rows popped because every column had been tried.
    Backtracks,
    /// Column swaps attempted by the local search.
    SwapsTried,
    /// Swaps undone because they increased the conflict count.
    SwapsReverted,
    /// Fresh shuffles started by the local search.
    Restarts,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    pub(crate) fn reset(&mut self) {
        self.stats = [0; Counters::COUNT];
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for counter in Counters::iter() {
            let name: &'static str = counter.into();
            writeln!(f, "{:>14}: {}", name, self.get(counter))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_and_reset() {
        let mut stats = Statistics::new();
        stats.increment(Counters::Backtracks);
        stats.increment(Counters::Backtracks);
        stats.increment(Counters::Restarts);
        assert_eq!(stats.get(Counters::Backtracks), 2);
        assert_eq!(stats.get(Counters::Restarts), 1);
        assert_eq!(stats.get(Counters::Placements), 0);

        stats.reset();
        assert_eq!(stats, Statistics::new());
    }

    #[test]
    fn test_display_lists_every_counter() {
        let text = Statistics::new().to_string();
        assert_eq!(text.lines().count(), Counters::COUNT);
        assert!(text.contains("SwapsReverted: 0"));
    }
}
