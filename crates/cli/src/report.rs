// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Human-readable diff report.
//!
//! Sections are emitted only when they have content, so two equivalent
//! submissions produce an empty report:
//!
//! ```text
//! Jobs only in the <label A>:
//!   '<id>': '<outcome>'
//! Jobs only in the <label B>:
//!   '<id>': '<outcome>'
//! Jobs with different outcomes:
//!   <label A> vs <label B>
//!   '<id>': '<outcome A>' vs '<outcome B>'
//! ```
//!
//! Only the first two sections colorize outcomes.

use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::io;

use crate::ansi::colorize_outcome;
use crate::diff::DiffResult;
use crate::submission::NormalizedSubmission;

/// Renders a [`DiffResult`] for two labeled submissions.
#[derive(Clone, Debug)]
pub struct Reporter<'a> {
    label_a: &'a str,
    label_b: &'a str,
    color: bool,
}

impl<'a> Reporter<'a> {
    /// Reporter with colorized outcomes.
    pub fn new(label_a: &'a str, label_b: &'a str) -> Self {
        Self {
            label_a,
            label_b,
            color: true,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Render the report; empty when `diff` is empty.
    pub fn render(
        &self,
        a: &NormalizedSubmission,
        b: &NormalizedSubmission,
        diff: &DiffResult,
    ) -> String {
        let mut out = String::new();
        self.only_in(&mut out, self.label_a, &diff.only_a, a);
        self.only_in(&mut out, self.label_b, &diff.only_b, b);

        if !diff.changed.is_empty() {
            let _ = writeln!(out, "Jobs with different outcomes:");
            let _ = writeln!(out, "  {} vs {}", self.label_a, self.label_b);
            for (job, outcomes) in &diff.changed {
                let _ = writeln!(out, "  '{}': '{}' vs '{}'", job, outcomes.a, outcomes.b);
            }
        }
        out
    }

    /// Render the report into `writer`.
    pub fn write<W: io::Write>(
        &self,
        writer: &mut W,
        a: &NormalizedSubmission,
        b: &NormalizedSubmission,
        diff: &DiffResult,
    ) -> io::Result<()> {
        writer.write_all(self.render(a, b, diff).as_bytes())
    }

    fn only_in(
        &self,
        out: &mut String,
        label: &str,
        jobs: &BTreeSet<String>,
        submission: &NormalizedSubmission,
    ) {
        if jobs.is_empty() {
            return;
        }
        let _ = writeln!(out, "Jobs only in the {}:", label);
        for job in jobs {
            let Some(outcome) = submission.outcome(job) else {
                continue;
            };
            let _ = writeln!(out, "  '{}': '{}'", job, self.outcome(outcome));
        }
    }

    fn outcome<'o>(&self, outcome: &'o str) -> Cow<'o, str> {
        if self.color {
            colorize_outcome(outcome)
        } else {
            Cow::Borrowed(outcome)
        }
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
