// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable names.
//!
//! Flags read their fallbacks through clap's `env` attribute; logging reads
//! its filter through env_logger. Both refer to the names defined here.

/// `WILDPAREN_LENIENT`: fallback for `--lenient`.
pub const WILDPAREN_LENIENT: &str = "WILDPAREN_LENIENT";

/// `RUST_LOG`: log filter directives.
pub const RUST_LOG: &str = "RUST_LOG";

/// `RUST_LOG_STYLE`: log color style.
pub const RUST_LOG_STYLE: &str = "RUST_LOG_STYLE";

/// Filter used when `RUST_LOG` is unset.
pub fn default_log_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Initialize env_logger from `RUST_LOG`, falling back to
/// [`default_log_filter`].
pub fn init_logging(verbose: bool) {
    let env = env_logger::Env::new()
        .filter_or(RUST_LOG, default_log_filter(verbose))
        .write_style(RUST_LOG_STYLE);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
