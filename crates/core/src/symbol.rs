// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Character classes of the wildcard-parenthesis alphabet.

use std::fmt;

/// One character of the alphabet `(`, `)`, `*`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// `(`
    Open,
    /// `)`
    Close,
    /// `*`, readable as `(`, `)` or nothing
    Wildcard,
}

impl Symbol {
    /// Classify a character, returning `None` outside the alphabet.
    pub const fn classify(ch: char) -> Option<Self> {
        match ch {
            '(' => Some(Self::Open),
            ')' => Some(Self::Close),
            '*' => Some(Self::Wildcard),
            _ => None,
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Self::Open => '(',
            Self::Close => ')',
            Self::Wildcard => '*',
        }
    }
}

impl TryFrom<char> for Symbol {
    type Error = char;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Self::classify(ch).ok_or(ch)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
#[path = "symbol_tests.rs"]
mod tests;
