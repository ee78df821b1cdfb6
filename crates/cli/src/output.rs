// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Result formatting.

use crate::cases::{CaseOutcome, CaseSummary, TestCase};
use crate::cli::OutputFormat;
use serde::Serialize;
use wildparen_core::Verdict;

/// JSON result line: the checked input followed by its verdict.
#[derive(Debug, Serialize)]
pub struct ResultOutput<'a> {
    pub input: &'a str,
    #[serde(flatten)]
    pub verdict: &'a Verdict,
}

/// Render one verdict as a single output line.
pub fn render(
    format: OutputFormat,
    input: &str,
    verdict: &Verdict,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(verdict.valid.to_string()),
        OutputFormat::Json => serde_json::to_string(&ResultOutput { input, verdict }),
    }
}

/// JSON line for one test case.
#[derive(Debug, Serialize)]
pub struct CaseOutput<'a> {
    pub case: usize,
    pub input: &'a str,
    pub expected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<bool>,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'a str>,
}

/// Render the report for test case `number` (1-based).
///
/// Text output is a status line, followed on failure by the input, the
/// expected verdict and the actual one.
pub fn render_case(
    format: OutputFormat,
    number: usize,
    case: &TestCase,
    outcome: &CaseOutcome,
) -> Result<Vec<String>, serde_json::Error> {
    match format {
        OutputFormat::Text => render_case_text(number, case, outcome),
        OutputFormat::Json => {
            let (actual, status, error) = match outcome {
                CaseOutcome::Passed => (Some(case.output), "passed", None),
                CaseOutcome::Failed { actual } => (Some(*actual), "failed", None),
                CaseOutcome::Error { message } => (None, "error", Some(message.as_str())),
            };
            let line = serde_json::to_string(&CaseOutput {
                case: number,
                input: &case.input,
                expected: case.output,
                actual,
                status,
                error,
            })?;
            Ok(vec![line])
        }
    }
}

fn render_case_text(
    number: usize,
    case: &TestCase,
    outcome: &CaseOutcome,
) -> Result<Vec<String>, serde_json::Error> {
    let lines = match outcome {
        CaseOutcome::Passed => vec![format!("Test Case {}: Passed", number)],
        CaseOutcome::Failed { actual } => vec![
            format!("Test Case {}: Failed", number),
            format!("   Input: {}", serde_json::to_string(&case.input)?),
            format!("   Expected: {}", case.output),
            format!("   Actual: {}", actual),
        ],
        CaseOutcome::Error { message } => {
            vec![format!("Test Case {}: Error: {}", number, message)]
        }
    };
    Ok(lines)
}

/// Closing tally for text output.
pub fn render_summary(summary: &CaseSummary) -> String {
    format!("{} passed, {} failed", summary.passed, summary.failed)
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
