// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Outcome colorization.

use std::borrow::Cow;

/// ANSI escape sequences used for outcomes
pub mod escape {
    /// Bright green, blinking
    pub const PASS: &str = "\x1b[1;32;5m";

    /// Bright red, blinking
    pub const FAIL: &str = "\x1b[1;31;5m";

    /// Red, for fatal diagnostics on stderr
    pub const ERROR: &str = "\x1b[31m";

    /// Reset all attributes
    pub const RESET: &str = "\x1b[0m";
}

/// Wrap a `pass` or `fail` outcome in its color.
///
/// Any other outcome string is returned untouched, without a reset suffix.
pub fn colorize_outcome(outcome: &str) -> Cow<'_, str> {
    let start = match outcome {
        "pass" => escape::PASS,
        "fail" => escape::FAIL,
        _ => return Cow::Borrowed(outcome),
    };
    Cow::Owned(format!("{start}{outcome}{reset}", reset = escape::RESET))
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
