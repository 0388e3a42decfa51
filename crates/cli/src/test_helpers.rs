// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Fixture builders for unit tests.

use std::io::Write;

use serde_json::json;
use tempfile::NamedTempFile;
use xz2::write::XzEncoder;

/// One entry of a fixture tarball.
pub enum TarMember<'a> {
    File(&'a str, &'a [u8]),
    Symlink(&'a str, &'a str),
    HardLink(&'a str, &'a str),
}

/// Uncompressed tarball bytes holding the given members.
pub fn tar_bytes(members: &[TarMember<'_>]) -> Vec<u8> {
    let mut builder = tar::Builder::new(Vec::new());
    for member in members {
        let mut header = tar::Header::new_gnu();
        header.set_mode(0o644);
        match member {
            TarMember::File(path, contents) => {
                header.set_size(contents.len() as u64);
                header.set_entry_type(tar::EntryType::Regular);
                builder.append_data(&mut header, path, *contents).unwrap();
            }
            TarMember::Symlink(path, target) | TarMember::HardLink(path, target) => {
                let entry_type = match member {
                    TarMember::Symlink(..) => tar::EntryType::Symlink,
                    _ => tar::EntryType::Link,
                };
                header.set_size(0);
                header.set_entry_type(entry_type);
                header.set_link_name(target).unwrap();
                builder.append_data(&mut header, path, std::io::empty()).unwrap();
            }
        }
    }
    builder.into_inner().unwrap()
}

/// Compress `data` into a single xz stream.
pub fn xz_compress(data: &[u8]) -> Vec<u8> {
    let mut encoder = XzEncoder::new(Vec::new(), 6);
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

/// Write raw bytes to a `.tar.xz` temp file.
pub fn write_file(bytes: &[u8]) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".tar.xz")
        .tempfile()
        .unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}

/// Build a `.tar.xz` archive holding the given members.
pub fn write_archive_members(members: &[TarMember<'_>]) -> NamedTempFile {
    write_file(&xz_compress(&tar_bytes(members)))
}

/// Build a `.tar.xz` archive holding the given `(path, contents)` files.
pub fn write_archive(members: &[(&str, &[u8])]) -> NamedTempFile {
    let members: Vec<_> = members
        .iter()
        .map(|(path, contents)| TarMember::File(path, contents))
        .collect();
    write_archive_members(&members)
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
