// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Submission diff
//!
//! Compares two test-result submission archives and reports the jobs whose
//! outcomes diverge between them.
//!
//! A submission archive is a `.tar.xz` tarball carrying a `submission.json`
//! member shaped like:
//!
//! ```json
//! { "results": [ { "id": "job1", "status": "pass" }, ... ] }
//! ```
//!
//! The pipeline runs one archive at a time:
//!
//! 1. [`archive::ArchiveReader`] extracts and parses the member,
//! 2. [`submission::normalize`] reduces it to job id → outcome,
//! 3. [`diff::diff_submissions`] partitions the differences,
//! 4. [`report::Reporter`] renders them as text.
//!
//! ```no_run
//! use std::path::Path;
//! use subdiff::compare::compare_archives;
//! use subdiff::report::Reporter;
//!
//! # fn main() -> subdiff::error::Result<()> {
//! let comparison = compare_archives(Path::new("a.tar.xz"), Path::new("b.tar.xz"))?;
//! let report = Reporter::new("a.tar.xz", "b.tar.xz").render(
//!     &comparison.a,
//!     &comparison.b,
//!     &comparison.diff,
//! );
//! print!("{report}");
//! # Ok(())
//! # }
//! ```

pub mod ansi;
pub mod archive;
pub mod cli;
pub mod compare;
pub mod diff;
pub mod error;
pub mod logging;
pub mod output_diagnostic;
pub mod report;
pub mod submission;

#[cfg(test)]
mod test_helpers;

pub use error::{Error, Result};
