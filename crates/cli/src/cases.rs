// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test case files: expected verdicts checked against the validator.
//!
//! A case file is a JSON array of objects with an `input` string and the
//! expected `output` verdict:
//!
//! ```json
//! [
//!   { "input": "(*)", "output": true },
//!   { "input": ")(", "output": false }
//! ]
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use wildparen_core::Validator;

#[derive(Debug, Error)]
pub enum CasesError {
    #[error("failed to read test cases from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid test cases in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// One input with its expected verdict.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TestCase {
    pub input: String,
    pub output: bool,
}

/// Result of running one [`TestCase`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CaseOutcome {
    Passed,
    Failed { actual: bool },
    /// The input could not be checked at all.
    Error { message: String },
}

impl CaseOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }
}

/// Tally of a case run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CaseSummary {
    pub passed: usize,
    pub failed: usize,
}

impl CaseSummary {
    pub fn record(&mut self, outcome: &CaseOutcome) {
        if outcome.is_passed() {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed
    }
}

/// Load a case file.
pub fn load(path: &Path) -> Result<Vec<TestCase>, CasesError> {
    let content = std::fs::read_to_string(path).map_err(|source| CasesError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content).map_err(|source| CasesError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse case file content. Every entry needs both `input` and `output`.
pub fn parse(content: &str) -> Result<Vec<TestCase>, serde_json::Error> {
    serde_json::from_str(content)
}

/// Check one case with `validator`.
pub fn run_case(validator: &Validator, case: &TestCase) -> CaseOutcome {
    match validator.check(&case.input) {
        Ok(verdict) if verdict.valid == case.output => CaseOutcome::Passed,
        Ok(verdict) => CaseOutcome::Failed {
            actual: verdict.valid,
        },
        Err(e) => CaseOutcome::Error {
            message: e.to_string(),
        },
    }
}

#[cfg(test)]
#[path = "cases_tests.rs"]
mod tests;
