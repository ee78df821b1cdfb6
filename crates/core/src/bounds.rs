// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Range of unmatched open-parenthesis counts reachable during a scan.

use crate::symbol::Symbol;
use serde::Serialize;
use std::fmt;

/// Minimum and maximum number of unmatched `(` over every reading of the
/// wildcards seen so far.
///
/// Always satisfies `low <= high`. A step that would take `high` below zero
/// has no successor: no reading can match that `)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Bounds {
    low: usize,
    high: usize,
}

impl Bounds {
    /// Bounds before any input has been read.
    pub const START: Self = Self { low: 0, high: 0 };

    pub fn low(&self) -> usize {
        self.low
    }

    pub fn high(&self) -> usize {
        self.high
    }

    /// Advance by one symbol, or `None` once `high` would go negative.
    ///
    /// `low` is clamped at zero: readings that would close more than is
    /// open are dropped from the minimum rather than rejected.
    #[must_use]
    pub fn step(self, symbol: Symbol) -> Option<Self> {
        match symbol {
            Symbol::Open => Some(Self {
                low: self.low + 1,
                high: self.high + 1,
            }),
            Symbol::Close => Some(Self {
                low: self.low.saturating_sub(1),
                high: self.high.checked_sub(1)?,
            }),
            Symbol::Wildcard => Some(Self {
                low: self.low.saturating_sub(1),
                high: self.high + 1,
            }),
        }
    }

    /// Whether some reading leaves nothing open.
    pub fn is_balanced(&self) -> bool {
        self.low == 0
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "low={} high={}", self.low, self.high)
    }
}

#[cfg(test)]
#[path = "bounds_tests.rs"]
mod tests;
