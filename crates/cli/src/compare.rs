// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Archive to diff pipeline.

use std::path::Path;

use crate::archive::ArchiveReader;
use crate::diff::{diff_submissions, DiffResult};
use crate::error::{Error, Result};
use crate::submission::{normalize, NormalizedSubmission};

/// Both normalized submissions and their differences.
#[derive(Clone, Debug)]
pub struct Comparison {
    pub a: NormalizedSubmission,
    pub b: NormalizedSubmission,
    pub diff: DiffResult,
}

/// Read and normalize the submission archived at `path`.
pub fn load_submission(path: &Path) -> Result<NormalizedSubmission> {
    let record = ArchiveReader::new().read(path)?;
    normalize(&record).map_err(|source| Error::Schema {
        path: path.to_path_buf(),
        source,
    })
}

/// Load both archives, A first, and diff them.
///
/// The first failure aborts the comparison.
pub fn compare_archives(path_a: &Path, path_b: &Path) -> Result<Comparison> {
    let a = load_submission(path_a)?;
    tracing::info!(path = %path_a.display(), jobs = a.len(), "loaded submission");
    let b = load_submission(path_b)?;
    tracing::info!(path = %path_b.display(), jobs = b.len(), "loaded submission");

    let diff = diff_submissions(&a, &b);
    Ok(Comparison { a, b, diff })
}

#[cfg(test)]
#[path = "compare_tests.rs"]
mod tests;
