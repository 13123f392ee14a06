//! Record definition.

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::config::ID_FIELD;
use crate::types::id::RecordId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Client-supplied fields of a record. Open schema.
pub type Fields = Map<String, Value>;

/// One entry of the collection. Key order is kept as stored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Fields);

impl Record {
    /// Builds `{id, ...fields}` with `id` first. A client `id` in `fields` is
    /// dropped in favour of the assigned one.
    pub fn new(id: RecordId, fields: Fields) -> Self {
        let mut map = Map::with_capacity(fields.len() + 1);
        map.insert(ID_FIELD.to_string(), id.into());
        map.extend(fields.into_iter().filter(|(k, _)| k != ID_FIELD));
        Self(map)
    }

    pub fn id(&self) -> Option<&Value> {
        self.0.get(ID_FIELD)
    }

    pub fn has_id(&self, id: RecordId) -> bool {
        self.id().map_or(false, |v| id.matches(v))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Shallow merge: every key in `fields` overwrites, everything else stays.
    ///
    /// An `id` in `fields` overwrites the stored id as well.
    pub fn merge(&mut self, fields: Fields) {
        for (k, v) in fields {
            self.0.insert(k, v);
        }
    }

    pub fn fields(&self) -> &Fields {
        &self.0
    }
}
