// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic output on stderr.
//!
//! Colored when stderr is a terminal, plain text otherwise.

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};

/// Print an error message to stderr, in red on a terminal.
pub fn print_error(msg: impl Display) {
    let is_tty = io::stderr().is_terminal();
    write_error(&mut io::stderr(), msg, is_tty);
}

fn write_error<W: Write>(writer: &mut W, msg: impl Display, is_terminal: bool) {
    write_styled(writer, "31", "Error", msg, is_terminal);
}

/// Print a follow-up hint to stderr, dimmed on a terminal.
pub fn print_hint(msg: impl Display) {
    let is_tty = io::stderr().is_terminal();
    write_hint(&mut io::stderr(), msg, is_tty);
}

fn write_hint<W: Write>(writer: &mut W, msg: impl Display, is_terminal: bool) {
    write_styled(writer, "2", "hint", msg, is_terminal);
}

fn write_styled<W: Write>(
    writer: &mut W,
    sgr: &str,
    label: &str,
    msg: impl Display,
    is_terminal: bool,
) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[{}m{}: {}\x1b[0m", sgr, label, msg);
    } else {
        let _ = writeln!(writer, "{}: {}", label, msg);
    }
}

#[cfg(test)]
#[path = "output_diagnostic_tests.rs"]
mod tests;
