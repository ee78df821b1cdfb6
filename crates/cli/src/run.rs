// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reads candidates, checks them, and writes one result line each.

use crate::cases::{self, CaseSummary, CasesError};
use crate::cli::{Cli, OutputFormat};
use crate::io::{InputError, LineSink, TokenSource};
use crate::output::{render, render_case, render_summary};
use log::{debug, info};
use std::io;
use std::path::Path;
use thiserror::Error;
use wildparen_core::{ValidationError, Validator};

/// Process exit codes.
pub mod exit_codes {
    /// Checked successfully, whatever the verdict
    pub const SUCCESS: i32 = 0;
    /// Missing or malformed input
    pub const INPUT: i32 = 1;
    /// Result could not be written
    pub const OUTPUT: i32 = 2;
    /// At least one test case did not pass
    pub const CASES_FAILED: i32 = 3;
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Cases(#[from] CasesError),
    #[error("{failed} of {total} test cases failed")]
    CasesFailed { failed: usize, total: usize },
}

impl RunError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Input(_) | Self::Validation(_) | Self::Cases(_) => exit_codes::INPUT,
            Self::Output(_) | Self::Encode(_) => exit_codes::OUTPUT,
            Self::CasesFailed { .. } => exit_codes::CASES_FAILED,
        }
    }

    /// Follow-up advice for the user, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Validation(ValidationError::UnexpectedChar { .. }) => {
                Some("only '(', ')' and '*' are allowed; pass --lenient to skip other characters")
            }
            Self::Input(InputError::Empty) => {
                Some("pass the string as an argument or write it to stdin")
            }
            Self::Cases(CasesError::Parse { .. }) => Some(
                "expected a JSON array of objects with an \"input\" string and an \"output\" boolean",
            ),
            _ => None,
        }
    }
}

/// Run the checks `cli` asks for, returning how many strings were checked.
///
/// The positional input takes precedence over `source`. With `--all`, every
/// token is checked and the first malformed one stops the run. With
/// `--cases`, `source` is not read; see [`run_cases`].
pub fn run<S, W>(cli: &Cli, source: &mut S, sink: &mut W) -> Result<usize, RunError>
where
    S: TokenSource + ?Sized,
    W: LineSink + ?Sized,
{
    let validator = Validator::new(cli.policy());
    if let Some(path) = &cli.cases {
        return run_cases(&validator, cli, path, sink);
    }

    let mut checked = 0;

    if let Some(input) = &cli.input {
        check_one(&validator, cli, input, sink)?;
        checked += 1;
    } else if cli.all {
        while let Some(token) = source.read_token()? {
            check_one(&validator, cli, &token, sink)?;
            checked += 1;
        }
    } else {
        let token = source.require_token()?;
        check_one(&validator, cli, &token, sink)?;
        checked += 1;
    }

    sink.flush_lines()?;
    info!("checked {} input(s)", checked);
    Ok(checked)
}

/// Run every case in the file at `path`, reporting each one.
///
/// Every case is reported before any failure is returned as
/// [`RunError::CasesFailed`].
pub fn run_cases<W>(
    validator: &Validator,
    cli: &Cli,
    path: &Path,
    sink: &mut W,
) -> Result<usize, RunError>
where
    W: LineSink + ?Sized,
{
    let test_cases = cases::load(path)?;
    info!(
        "loaded {} test case(s) from {}",
        test_cases.len(),
        path.display()
    );

    let mut summary = CaseSummary::default();
    for (index, case) in test_cases.iter().enumerate() {
        let outcome = cases::run_case(validator, case);
        summary.record(&outcome);
        for line in render_case(cli.output_format, index + 1, case, &outcome)? {
            sink.write_line(&line)?;
        }
    }

    if cli.output_format == OutputFormat::Text {
        sink.write_line(&render_summary(&summary))?;
    }
    sink.flush_lines()?;

    if summary.failed > 0 {
        return Err(RunError::CasesFailed {
            failed: summary.failed,
            total: summary.total(),
        });
    }
    Ok(summary.total())
}

fn check_one<W>(
    validator: &Validator,
    cli: &Cli,
    input: &str,
    sink: &mut W,
) -> Result<(), RunError>
where
    W: LineSink + ?Sized,
{
    let verdict = validator.check(input)?;
    debug!("{:?} -> {} ({})", input, verdict.valid, verdict.bounds);
    sink.write_line(&render(cli.output_format, input, &verdict)?)?;
    Ok(())
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
