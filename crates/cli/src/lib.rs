// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line front end for `wildparen-core`.
//!
//! Reads a candidate string from an argument or stdin, decides whether its
//! `*` wildcards can be read so that the parentheses balance, and prints
//! `true` or `false`.

pub mod cases;
pub mod cli;
pub mod env;
pub mod io;
pub mod output;
pub mod output_diagnostic;
pub mod run;
