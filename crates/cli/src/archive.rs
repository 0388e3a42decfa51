// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Submission archive reading.
//!
//! A submission archive is an xz-compressed tarball (one or more
//! concatenated xz streams) carrying a `submission.json` member. The reader
//! streams the tarball, keeps the bytes of the last matching member and
//! parses them as JSON. A member stored as a symlink or hard link is read
//! from its target, which costs one more pass over the archive per link.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Component, Path, PathBuf};

use thiserror::Error;
use xz2::read::XzDecoder;

/// Member holding the submission report inside the archive.
pub const SUBMISSION_MEMBER: &str = "submission.json";

/// Errors that can occur when reading a submission archive
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("Failed to open archive {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Archive {} has no member named '{member}'", path.display())]
    MemberNotFound { path: PathBuf, member: String },

    #[error("Failed to parse '{member}' in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        member: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Parsed JSON document extracted from a submission archive.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmissionRecord(serde_json::Value);

impl SubmissionRecord {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }
}

impl From<serde_json::Value> for SubmissionRecord {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

/// Reads the submission member out of `.tar.xz` archives.
#[derive(Clone, Debug)]
pub struct ArchiveReader {
    member: String,
}

impl Default for ArchiveReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ArchiveReader {
    /// Reader looking for [`SUBMISSION_MEMBER`].
    pub fn new() -> Self {
        Self {
            member: SUBMISSION_MEMBER.to_string(),
        }
    }

    /// Reader looking for a differently named member.
    pub fn with_member(member: impl Into<String>) -> Self {
        Self {
            member: member.into(),
        }
    }

    pub fn member(&self) -> &str {
        &self.member
    }

    /// Extract and parse the member from the archive at `path`.
    ///
    /// The archive file is closed before this returns.
    pub fn read(&self, path: &Path) -> Result<SubmissionRecord, ArchiveError> {
        let bytes = self.extract_member(path)?;
        let value = serde_json::from_slice(&bytes).map_err(|source| ArchiveError::Parse {
            path: path.to_path_buf(),
            member: self.member.clone(),
            source,
        })?;
        Ok(SubmissionRecord(value))
    }

    /// Return the contents of the member, following symlinks and hard links
    /// to the regular file they name.
    fn extract_member(&self, path: &Path) -> Result<Vec<u8>, ArchiveError> {
        let mut name = normalize_entry_path(Path::new(&self.member));

        for _ in 0..=MAX_LINK_HOPS {
            match self.scan(path, &name)? {
                Some(Found::Contents(bytes)) => {
                    tracing::debug!(
                        path = %path.display(),
                        member = %name.display(),
                        bytes = bytes.len(),
                        "extracted member"
                    );
                    return Ok(bytes);
                }
                Some(Found::Link(target)) => {
                    tracing::debug!(
                        path = %path.display(),
                        member = %name.display(),
                        target = %target.display(),
                        "following link"
                    );
                    name = target;
                }
                None => break,
            }
        }

        Err(ArchiveError::MemberNotFound {
            path: path.to_path_buf(),
            member: self.member.clone(),
        })
    }

    /// Stream the whole archive once and report the last entry named `name`.
    fn scan(&self, path: &Path, name: &Path) -> Result<Option<Found>, ArchiveError> {
        let open_error = |source| ArchiveError::Open {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(open_error)?;
        tracing::debug!(path = %path.display(), "opened archive");

        // Concatenated xz streams form one valid archive.
        let decoder = XzDecoder::new_multi_decoder(BufReader::new(file));
        let mut archive = tar::Archive::new(decoder);
        let mut found = None;

        for entry in archive.entries().map_err(open_error)? {
            let mut entry = entry.map_err(open_error)?;
            let entry_type = entry.header().entry_type();
            if !(entry_type.is_file() || entry_type.is_symlink() || entry_type.is_hard_link()) {
                continue;
            }
            let is_member = entry
                .path()
                .map(|entry_path| normalize_entry_path(&entry_path) == name)
                .map_err(open_error)?;
            if !is_member {
                continue;
            }

            if entry_type.is_file() {
                let mut bytes = Vec::new();
                entry.read_to_end(&mut bytes).map_err(open_error)?;
                found = Some(Found::Contents(bytes));
                continue;
            }

            let target = entry.link_name().map_err(open_error)?;
            found = target.map(|target| {
                // Symlinks resolve against the link's directory, hard links
                // against the archive root.
                let target = if entry_type.is_symlink() {
                    name.parent().unwrap_or(Path::new("")).join(target)
                } else {
                    target.into_owned()
                };
                Found::Link(normalize_entry_path(&target))
            });
        }

        Ok(found)
    }
}

/// Upper bound on link indirections, so link cycles end as not found.
const MAX_LINK_HOPS: usize = 8;

/// Outcome of scanning the archive for one entry name.
enum Found {
    Contents(Vec<u8>),
    Link(PathBuf),
}

/// Lexically normalize an entry path: drop `.` and root components and
/// resolve `..` against the preceding component.
fn normalize_entry_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => normalized.push(part),
            Component::ParentDir => {
                normalized.pop();
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }
    normalized
}

#[cfg(test)]
#[path = "archive_tests.rs"]
mod tests;
