// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Outcome comparison between two normalized submissions.

use std::collections::{BTreeMap, BTreeSet};

use crate::submission::NormalizedSubmission;

/// Outcomes of one job in submission A and submission B.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutcomePair {
    pub a: String,
    pub b: String,
}

impl OutcomePair {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }

    /// The same pair seen from the other side.
    pub fn reversed(&self) -> Self {
        Self {
            a: self.b.clone(),
            b: self.a.clone(),
        }
    }
}

/// Differences between two submissions.
///
/// The three partitions are disjoint: `only_a` and `only_b` are set
/// differences and `changed` only holds ids present in both.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiffResult {
    pub only_a: BTreeSet<String>,
    pub only_b: BTreeSet<String>,
    pub changed: BTreeMap<String, OutcomePair>,
}

impl DiffResult {
    /// True when both submissions hold the same jobs with the same outcomes.
    pub fn is_empty(&self) -> bool {
        self.only_a.is_empty() && self.only_b.is_empty() && self.changed.is_empty()
    }
}

/// Compare two submissions.
///
/// Outcomes are compared by exact string equality.
pub fn diff_submissions(a: &NormalizedSubmission, b: &NormalizedSubmission) -> DiffResult {
    let mut diff = DiffResult::default();

    for (id, outcome_a) in a.iter() {
        match b.outcome(id) {
            None => {
                diff.only_a.insert(id.to_string());
            }
            Some(outcome_b) if outcome_b != outcome_a => {
                let pair = OutcomePair::new(outcome_a, outcome_b);
                diff.changed.insert(id.to_string(), pair);
            }
            Some(_) => {}
        }
    }

    diff.only_b = b
        .job_ids()
        .filter(|id| !a.contains(id))
        .map(str::to_string)
        .collect();

    tracing::debug!(
        only_a = diff.only_a.len(),
        only_b = diff.only_b.len(),
        changed = diff.changed.len(),
        "compared submissions"
    );
    diff
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
