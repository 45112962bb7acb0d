// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! formfill binary entry point.

use clap::Parser;

use formfill::app;
use formfill::cli::Cli;
use formfill::output::print_error;

fn main() {
    let cli = Cli::parse();

    if let Err(error) = app::run(&cli) {
        print_error(&error);
        std::process::exit(1);
    }
}
