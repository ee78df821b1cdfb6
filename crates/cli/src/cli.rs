// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line arguments.

use clap::builder::BoolishValueParser;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use wildparen_core::AlphabetPolicy;

/// Check whether a string of '(', ')' and '*' can be balanced
#[derive(Parser, Debug, Clone)]
#[command(
    name = "wildparen",
    version,
    about = "Check whether a string of '(', ')' and '*' can be balanced"
)]
pub struct Cli {
    /// String to check (read from stdin when omitted)
    #[arg(value_name = "INPUT", conflicts_with = "all")]
    pub input: Option<String>,

    /// Check every whitespace-delimited token on stdin, one result per line
    #[arg(long)]
    pub all: bool,

    /// Run a JSON file of test cases ([{"input": "(*)", "output": true}, ...])
    #[arg(long, value_name = "FILE", conflicts_with_all = ["input", "all"])]
    pub cases: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub output_format: OutputFormat,

    /// Skip characters other than '(', ')' and '*' instead of rejecting them
    #[arg(long, env = "WILDPAREN_LENIENT", value_parser = BoolishValueParser::new())]
    pub lenient: bool,

    /// Log scan details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn policy(&self) -> AlphabetPolicy {
        if self.lenient {
            AlphabetPolicy::Ignore
        } else {
            AlphabetPolicy::Strict
        }
    }
}

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `true` or `false`
    #[default]
    Text,
    /// One JSON object per result
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
