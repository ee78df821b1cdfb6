// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Balance checking for parenthesis strings with wildcards.
//!
//! A string over `(`, `)` and `*` is accepted when some reading of every `*`
//! as `(`, `)` or nothing yields a balanced sequence. [`is_valid`] answers
//! that in one pass; [`Validator`] adds an explicit policy for characters
//! outside the alphabet and reports the final [`Bounds`] of the scan.
//!
//! ```
//! use wildparen_core::is_valid;
//!
//! assert!(is_valid("(*))"));
//! assert!(!is_valid(")("));
//! ```

mod bounds;
pub mod oracle;
mod symbol;
mod validator;

pub use bounds::Bounds;
pub use symbol::Symbol;
pub use validator::{is_valid, AlphabetPolicy, ValidationError, Validator, Verdict};
