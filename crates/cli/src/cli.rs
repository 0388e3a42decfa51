// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

/// Compare job outcomes between two submission archives
#[derive(Parser, Debug)]
#[command(name = "subdiff", version)]
#[command(about = "Compare job outcomes between two submission archives")]
pub struct Cli {
    /// First submission archive (.tar.xz)
    #[arg(value_name = "ARCHIVE_A")]
    pub archive_a: PathBuf,

    /// Second submission archive (.tar.xz)
    #[arg(value_name = "ARCHIVE_B")]
    pub archive_b: PathBuf,

    /// When to colorize pass/fail outcomes
    #[arg(long, value_enum, default_value = "always")]
    pub color: ColorChoice,

    /// Increase diagnostic logging on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Labels naming each side in the report: the archive paths as given.
    pub fn labels(&self) -> (String, String) {
        (
            self.archive_a.display().to_string(),
            self.archive_b.display().to_string(),
        )
    }
}

/// Outcome colorization policy
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Always emit color sequences
    #[default]
    Always,
    /// Colorize only when stdout is a terminal
    Auto,
    /// Never emit color sequences
    Never,
}

impl ColorChoice {
    /// Whether to colorize given the terminal state of the output stream.
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Auto => is_terminal,
            ColorChoice::Never => false,
        }
    }
}

/// Process exit codes
pub mod exit_codes {
    /// Comparison completed, report printed (possibly empty)
    pub const SUCCESS: i32 = 0;
    /// An archive could not be read or its submission is malformed
    pub const ERROR: i32 = 1;
    /// Wrong arguments; clap reports these itself
    pub const USAGE: i32 = 2;
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
