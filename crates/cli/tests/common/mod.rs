// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Shared helpers for subdiff integration tests.

#![allow(dead_code)]

use serde_json::json;
use tempfile::NamedTempFile;
use xz2::write::XzEncoder;

// =============================================================================
// Archive Fixtures
// =============================================================================

/// Build a `.tar.xz` archive holding the given `(path, contents)` members.
pub fn write_archive(members: &[(&str, &[u8])]) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".tar.xz")
        .tempfile()
        .unwrap();

    let encoder = XzEncoder::new(file.as_file(), 6);
    let mut builder = tar::Builder::new(encoder);
    for (path, contents) in members {
        let mut header = tar::Header::new_gnu();
        header.set_size(contents.len() as u64);
        header.set_mode(0o644);
        header.set_entry_type(tar::EntryType::Regular);
        builder.append_data(&mut header, path, *contents).unwrap();
    }
    builder.into_inner().unwrap().finish().unwrap();
    file
}

/// Submission JSON with the given `(id, status)` results.
pub fn submission_json(results: &[(&str, &str)]) -> Vec<u8> {
    let results: Vec<_> = results
        .iter()
        .map(|(id, status)| {
            json!({
                "id": id,
                "status": status,
                "outcome": status,
                "comments": "",
                "io_log": [],
            })
        })
        .collect();
    let submission = json!({
        "title": "integration run",
        "origin": { "name": "checkbox" },
        "results": results,
    });
    serde_json::to_vec_pretty(&submission).unwrap()
}

/// Archive containing `submission.json` built from `(id, status)` results.
pub fn submission_archive(results: &[(&str, &str)]) -> NamedTempFile {
    let json = submission_json(results);
    write_archive(&[("submission.json", json.as_slice())])
}

/// Path of an archive as a `&str` argument.
pub fn arg(file: &NamedTempFile) -> &str {
    file.path().to_str().unwrap()
}
