// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! wildparen binary entry point.

use clap::Parser;

use wildparen::cli::Cli;
use wildparen::env::init_logging;
use wildparen::io::ReaderSource;
use wildparen::output_diagnostic::{print_error, print_hint};
use wildparen::run::run;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut source = ReaderSource::new(std::io::stdin().lock());
    let mut stdout = std::io::stdout().lock();

    if let Err(e) = run(&cli, &mut source, &mut stdout) {
        print_error(&e);
        if let Some(hint) = e.hint() {
            print_hint(hint);
        }
        std::process::exit(e.exit_code());
    }
}
