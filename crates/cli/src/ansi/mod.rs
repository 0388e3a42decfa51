// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ANSI escape sequence helpers.
//!
//! Colorizes job outcomes for terminal output and strips SGR sequences back
//! out of rendered text.

mod color;
mod parser;

pub use color::{colorize_outcome, escape};
pub use parser::{has_ansi, strip_ansi};
