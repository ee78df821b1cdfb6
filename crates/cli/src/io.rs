// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Token input and line output, kept apart from the validator.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Errors reading candidate strings.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
    #[error("no input provided")]
    Empty,
}

/// Source of whitespace-delimited candidate strings.
pub trait TokenSource {
    /// Next token, or `None` at end of input.
    fn read_token(&mut self) -> Result<Option<String>, InputError>;

    /// Next token, treating end of input as [`InputError::Empty`].
    fn require_token(&mut self) -> Result<String, InputError> {
        self.read_token()?.ok_or(InputError::Empty)
    }
}

/// Reads tokens a line at a time from any buffered reader.
pub struct ReaderSource<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }
}

impl<R: BufRead> TokenSource for ReaderSource<R> {
    fn read_token(&mut self) -> Result<Option<String>, InputError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

/// Destination for result lines.
pub trait LineSink {
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    fn flush_lines(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<W: Write> LineSink for W {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self, "{}", line)
    }

    fn flush_lines(&mut self) -> io::Result<()> {
        self.flush()
    }
}

#[cfg(test)]
#[path = "io_tests.rs"]
mod tests;
