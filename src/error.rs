// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Error types.

use std::path::PathBuf;
use thiserror::Error;

/// Failures of the backing document.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Backing file does not exist.
    #[error("document not found at {0:?}")]
    Missing(PathBuf),
    #[error("i/o error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Contents are not a valid document.
    #[error("invalid document: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("failed to serialize document: {0}")]
    Serialize(#[source] serde_json::Error),
    /// Backend refused the operation.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

#[derive(Error, Debug)]
pub enum KernelError {
    /// Item not found.
    #[error("record not found")]
    NotFound,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type StorageResult<T> = core::result::Result<T, StorageError>;
pub type KernelResult<T> = core::result::Result<T, KernelError>;
