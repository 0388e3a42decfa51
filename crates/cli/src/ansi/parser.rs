// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ANSI SGR sequence matching.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for matching ANSI SGR (Select Graphic Rendition) escape sequences.
/// Matches ESC [ followed by semicolon-separated numbers, ending with 'm'.
static ANSI_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: This regex pattern is a compile-time constant and is guaranteed to be valid
    #[allow(clippy::expect_used)]
    Regex::new(r"\x1b\[([0-9;]*)m").expect("ANSI regex pattern is invalid")
});

/// Strip all ANSI escape sequences, returning plain text.
pub fn strip_ansi(input: &str) -> String {
    ANSI_REGEX.replace_all(input, "").to_string()
}

/// Whether the input contains at least one SGR sequence.
pub fn has_ansi(input: &str) -> bool {
    ANSI_REGEX.is_match(input)
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
