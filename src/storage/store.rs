// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Whole-document stores.
//!
//! Every load returns the full document and every save replaces it in full.
//! Nothing is cached between calls and nothing is locked: callers that need
//! load-mutate-save to be atomic must serialize it themselves.

use crate::config::EMPTY_DOCUMENT;
use crate::error::{StorageError, StorageResult};
use crate::storage::document::Document;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Backing storage for the document.
pub trait DocumentStore: Send + Sync {
    /// Reads and parses the current document.
    fn load(&self) -> StorageResult<Document>;

    /// Overwrites the stored document with `doc`.
    fn save(&self, doc: &Document) -> StorageResult<()>;
}

/// A JSON file on local disk.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes an empty document if the file does not exist yet.
    /// Returns true when a file was created.
    pub fn init_if_missing(&self) -> StorageResult<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        std::fs::write(&self.path, EMPTY_DOCUMENT).map_err(|source| self.io_error(source))?;
        Ok(true)
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl DocumentStore for FileStore {
    fn load(&self) -> StorageResult<Document> {
        let data = std::fs::read(&self.path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => StorageError::Missing(self.path.clone()),
            _ => self.io_error(source),
        })?;
        Document::from_slice(&data)
    }

    fn save(&self, doc: &Document) -> StorageResult<()> {
        let data = doc.to_vec()?;
        let tmp_path = self.path.with_extension("tmp");
        std::fs::write(&tmp_path, &data).map_err(|source| self.io_error(source))?;
        std::fs::rename(&tmp_path, &self.path).map_err(|source| self.io_error(source))
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    data: Option<Vec<u8>>,
    fail_saves: bool,
}

/// In-memory store holding the serialized document.
///
/// Clones share the same state, so a test can keep a handle after giving one
/// away.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<MemoryState>>,
}

impl MemoryStore {
    /// A store with no document: every load fails like a missing file.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(doc: &Document) -> StorageResult<Self> {
        let store = Self::new();
        store.write().data = Some(doc.to_vec()?);
        Ok(store)
    }

    /// Seeds the store with raw text, which need not be a valid document.
    pub fn from_raw(data: impl Into<Vec<u8>>) -> Self {
        let store = Self::new();
        store.write().data = Some(data.into());
        store
    }

    /// Makes every following save fail.
    pub fn fail_saves(&self, fail: bool) {
        self.write().fail_saves = fail;
    }

    /// Raw stored text, if any.
    pub fn raw(&self) -> Option<Vec<u8>> {
        self.read().data.clone()
    }

    fn read(&self) -> RwLockReadGuard<'_, MemoryState> {
        self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, MemoryState> {
        self.state.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DocumentStore for MemoryStore {
    fn load(&self) -> StorageResult<Document> {
        match &self.read().data {
            Some(data) => Document::from_slice(data),
            None => Err(StorageError::Missing(PathBuf::from(":memory:"))),
        }
    }

    fn save(&self, doc: &Document) -> StorageResult<()> {
        let data = doc.to_vec()?;
        let mut state = self.write();
        if state.fail_saves {
            return Err(StorageError::Unavailable("saves disabled".to_string()));
        }
        state.data = Some(data);
        Ok(())
    }
}
