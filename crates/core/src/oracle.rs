// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Exhaustive reference check.
//!
//! Tries every reading of every `*` and tests plain bracket balance on each.
//! Exponential in the number of wildcards, so it is only meant for short
//! inputs, chiefly as a property-testing reference for [`crate::is_valid`].

use crate::symbol::Symbol;
use thiserror::Error;

/// Longest input [`brute_force`] accepts.
pub const ORACLE_MAX_LEN: usize = 15;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum OracleError {
    #[error("input of {len} characters exceeds the oracle limit of {max}")]
    TooLong { len: usize, max: usize },
    #[error("unexpected character {ch:?} at position {position}")]
    UnexpectedChar { ch: char, position: usize },
}

/// Decide balance by enumerating all `3^k` readings of the `k` wildcards.
pub fn brute_force(input: &str) -> Result<bool, OracleError> {
    let symbols = input
        .chars()
        .enumerate()
        .map(|(position, ch)| {
            Symbol::try_from(ch).map_err(|ch| OracleError::UnexpectedChar { ch, position })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if symbols.len() > ORACLE_MAX_LEN {
        return Err(OracleError::TooLong {
            len: symbols.len(),
            max: ORACLE_MAX_LEN,
        });
    }

    let wildcards = symbols
        .iter()
        .filter(|&&symbol| symbol == Symbol::Wildcard)
        .count();
    let readings = 3usize.pow(wildcards as u32);

    Ok((0..readings).any(|reading| is_balanced(&resolve(&symbols, reading))))
}

/// Replace each wildcard by the reading encoded in base-3 digits of `reading`
/// (0 = nothing, 1 = `(`, 2 = `)`).
fn resolve(symbols: &[Symbol], mut reading: usize) -> Vec<Symbol> {
    let mut resolved = Vec::with_capacity(symbols.len());
    for &symbol in symbols {
        if symbol != Symbol::Wildcard {
            resolved.push(symbol);
            continue;
        }
        match reading % 3 {
            0 => {}
            1 => resolved.push(Symbol::Open),
            _ => resolved.push(Symbol::Close),
        }
        reading /= 3;
    }
    resolved
}

/// Plain balance over a wildcard-free sequence.
fn is_balanced(symbols: &[Symbol]) -> bool {
    let mut depth = 0usize;
    for symbol in symbols {
        match symbol {
            Symbol::Open => depth += 1,
            Symbol::Close => match depth.checked_sub(1) {
                Some(next) => depth = next,
                None => return false,
            },
            Symbol::Wildcard => return false,
        }
    }
    depth == 0
}

#[cfg(test)]
#[path = "oracle_tests.rs"]
mod tests;
