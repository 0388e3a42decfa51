// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Submission diff binary entry point.

use std::io::{self, IsTerminal, Write};

use clap::Parser;

use subdiff::cli::{exit_codes, Cli};
use subdiff::compare::compare_archives;
use subdiff::logging;
use subdiff::output_diagnostic::print_error;
use subdiff::report::Reporter;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let comparison = match compare_archives(&cli.archive_a, &cli.archive_b) {
        Ok(comparison) => comparison,
        Err(e) => {
            print_error(e);
            std::process::exit(exit_codes::ERROR);
        }
    };

    let (label_a, label_b) = cli.labels();
    let color = cli.color.enabled(io::stdout().is_terminal());
    let reporter = Reporter::new(&label_a, &label_b).with_color(color);

    let mut stdout = io::stdout().lock();
    let written = reporter
        .write(&mut stdout, &comparison.a, &comparison.b, &comparison.diff)
        .and_then(|()| stdout.flush());
    if let Err(e) = written {
        print_error(format_args!("Failed to write report: {}", e));
        std::process::exit(exit_codes::ERROR);
    }
}
