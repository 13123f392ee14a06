// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! The persisted root object.

use crate::error::{StorageError, StorageResult};
use crate::storage::record::Record;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Root of all stored state: `{"carros": [...], ...}`.
///
/// Top-level keys other than `carros` are kept as-is across load and save.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub carros: Vec<Record>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Document {
    pub fn new(carros: Vec<Record>) -> Self {
        Self {
            carros,
            extra: Map::new(),
        }
    }

    pub fn from_slice(data: &[u8]) -> StorageResult<Self> {
        serde_json::from_slice(data).map_err(StorageError::Parse)
    }

    /// Compact JSON text, as written to disk.
    pub fn to_vec(&self) -> StorageResult<Vec<u8>> {
        serde_json::to_vec(self).map_err(StorageError::Serialize)
    }

    pub fn len(&self) -> usize {
        self.carros.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carros.is_empty()
    }
}
