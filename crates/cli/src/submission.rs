// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Normalized submissions: job id to outcome.

use std::collections::BTreeMap;

use serde_json::Value;
use thiserror::Error;

use crate::archive::SubmissionRecord;

/// Errors raised when a submission record lacks the expected shape
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Missing required field '{field}'")]
    MissingField { field: String },

    #[error("Field '{field}' must be {expected}")]
    InvalidType {
        field: String,
        expected: &'static str,
    },
}

/// One typed entry of a submission's `results` array.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobResult {
    pub id: String,
    pub status: String,
}

impl JobResult {
    fn from_entry(index: usize, entry: &Value) -> Result<Self, SchemaError> {
        let object = entry.as_object().ok_or_else(|| SchemaError::InvalidType {
            field: format!("results[{index}]"),
            expected: "an object",
        })?;
        let field = |name: &str| -> Result<String, SchemaError> {
            let path = format!("results[{index}].{name}");
            match object.get(name) {
                None => Err(SchemaError::MissingField { field: path }),
                Some(Value::String(s)) => Ok(s.clone()),
                Some(_) => Err(SchemaError::InvalidType {
                    field: path,
                    expected: "a string",
                }),
            }
        };
        Ok(Self {
            id: field("id")?,
            status: field("status")?,
        })
    }
}

impl SubmissionRecord {
    /// Validate the record and return its results in document order.
    pub fn job_results(&self) -> Result<Vec<JobResult>, SchemaError> {
        let results = self
            .as_value()
            .get("results")
            .ok_or_else(|| SchemaError::MissingField {
                field: "results".to_string(),
            })?
            .as_array()
            .ok_or_else(|| SchemaError::InvalidType {
                field: "results".to_string(),
                expected: "an array",
            })?;

        results
            .iter()
            .enumerate()
            .map(|(index, entry)| JobResult::from_entry(index, entry))
            .collect()
    }
}

/// Mapping from job id to its outcome in one submission.
///
/// Ids are unique; iteration is in ascending id order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NormalizedSubmission {
    outcomes: BTreeMap<String, String>,
}

impl NormalizedSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an outcome, returning the one it replaced.
    pub fn insert(
        &mut self,
        id: impl Into<String>,
        outcome: impl Into<String>,
    ) -> Option<String> {
        self.outcomes.insert(id.into(), outcome.into())
    }

    pub fn outcome(&self, id: &str) -> Option<&str> {
        self.outcomes.get(id).map(String::as_str)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.outcomes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn job_ids(&self) -> impl Iterator<Item = &str> {
        self.outcomes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.outcomes
            .iter()
            .map(|(id, outcome)| (id.as_str(), outcome.as_str()))
    }
}

impl<I, O> FromIterator<(I, O)> for NormalizedSubmission
where
    I: Into<String>,
    O: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (I, O)>>(iter: T) -> Self {
        let mut submission = Self::new();
        for (id, outcome) in iter {
            submission.insert(id, outcome);
        }
        submission
    }
}

/// Reduce a submission record to its id → outcome mapping.
///
/// Fails on the first malformed entry. When an id repeats, the later entry
/// wins.
pub fn normalize(record: &SubmissionRecord) -> Result<NormalizedSubmission, SchemaError> {
    let mut submission = NormalizedSubmission::new();
    for result in record.job_results()? {
        if let Some(previous) = submission.insert(result.id.clone(), result.status) {
            tracing::debug!(job = %result.id, %previous, "duplicate job id, later entry wins");
        }
    }
    tracing::debug!(jobs = submission.len(), "normalized submission");
    Ok(submission)
}

#[cfg(test)]
#[path = "submission_tests.rs"]
mod tests;
