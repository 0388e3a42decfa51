// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Crate-level error type.

use std::path::PathBuf;

use thiserror::Error;

use crate::archive::ArchiveError;
use crate::submission::SchemaError;

/// Any failure that aborts a comparison run
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Archive(#[from] ArchiveError),

    #[error("Invalid submission in {}: {source}", path.display())]
    Schema {
        path: PathBuf,
        #[source]
        source: SchemaError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
