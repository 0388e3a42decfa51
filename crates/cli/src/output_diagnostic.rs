// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fatal diagnostics for a failed comparison.
//!
//! When an archive cannot be read or its submission is malformed, the binary
//! prints one `Error: <message>` line here before exiting non-zero. Stdout
//! stays untouched so a failed run never looks like an empty report.

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};

use crate::ansi::escape;

/// Report a fatal error on stderr, in red when stderr is a terminal.
pub fn print_error(msg: impl Display) {
    let stderr = io::stderr();
    let color = stderr.is_terminal();
    write_error(&mut stderr.lock(), msg, color);
}

fn write_error<W: Write>(writer: &mut W, msg: impl Display, color: bool) {
    let line = format!("Error: {msg}");
    let _ = if color {
        writeln!(writer, "{}{line}{}", escape::ERROR, escape::RESET)
    } else {
        writeln!(writer, "{line}")
    };
}

#[cfg(test)]
#[path = "output_diagnostic_tests.rs"]
mod tests;
