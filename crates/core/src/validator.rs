// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-pass balance check over wildcard-parenthesis strings.

use crate::bounds::Bounds;
use crate::symbol::Symbol;
use log::{debug, trace};
use serde::Serialize;
use thiserror::Error;

/// What to do with characters other than `(`, `)` and `*`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlphabetPolicy {
    /// Reject the whole input.
    #[default]
    Strict,
    /// Skip the character, leaving the bounds untouched.
    Ignore,
}

/// Errors from [`Validator::check`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("unexpected character {ch:?} at position {position}")]
    UnexpectedChar { ch: char, position: usize },
}

/// Outcome of one scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Verdict {
    /// Whether some reading of the wildcards balances the input.
    pub valid: bool,
    /// Bounds after the last symbol that was accepted.
    #[serde(flatten)]
    pub bounds: Bounds,
    /// Symbols stepped through, including the one that caused a rejection.
    pub scanned: usize,
    /// Character position of the `)` that no reading can match.
    pub rejected_at: Option<usize>,
}

/// Balance checker with an explicit [`AlphabetPolicy`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Validator {
    policy: AlphabetPolicy,
}

impl Validator {
    pub const fn new(policy: AlphabetPolicy) -> Self {
        Self { policy }
    }

    pub const fn policy(&self) -> AlphabetPolicy {
        self.policy
    }

    /// Check `input`, honouring the alphabet policy.
    ///
    /// Under [`AlphabetPolicy::Strict`] the first foreign character is an
    /// error even if the scan would have rejected earlier.
    pub fn check(&self, input: &str) -> Result<Verdict, ValidationError> {
        if self.policy == AlphabetPolicy::Strict {
            if let Some((position, ch)) = input
                .chars()
                .enumerate()
                .find(|&(_, ch)| Symbol::classify(ch).is_none())
            {
                return Err(ValidationError::UnexpectedChar { ch, position });
            }
        }
        Ok(scan(classified(input)))
    }

    /// Check an already classified sequence.
    pub fn check_symbols<I>(symbols: I) -> Verdict
    where
        I: IntoIterator<Item = Symbol>,
    {
        scan(symbols.into_iter().enumerate())
    }
}

/// Whether some reading of every `*` as `(`, `)` or nothing balances `input`.
///
/// Characters outside the alphabet are skipped, so this never fails. The
/// empty string is valid.
pub fn is_valid(input: &str) -> bool {
    scan(classified(input)).valid
}

fn classified(input: &str) -> impl Iterator<Item = (usize, Symbol)> + '_ {
    input.chars().enumerate().filter_map(|(position, ch)| {
        let symbol = Symbol::classify(ch);
        if symbol.is_none() {
            trace!("skipping {ch:?} at position {position}");
        }
        symbol.map(|symbol| (position, symbol))
    })
}

fn scan(symbols: impl Iterator<Item = (usize, Symbol)>) -> Verdict {
    let mut bounds = Bounds::START;
    let mut scanned = 0;

    for (position, symbol) in symbols {
        scanned += 1;
        match bounds.step(symbol) {
            Some(next) => {
                trace!("{symbol} at {position}: {next}");
                bounds = next;
            }
            None => {
                debug!("unmatched ')' at position {position} ({bounds})");
                return Verdict {
                    valid: false,
                    bounds,
                    scanned,
                    rejected_at: Some(position),
                };
            }
        }
    }

    Verdict {
        valid: bounds.is_balanced(),
        bounds,
        scanned,
        rejected_at: None,
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
