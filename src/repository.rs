// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Record repository.
//!
//! Queries and mutations over a loaded [`Document`]. Mutations change the
//! document in place; the caller decides when to persist it. Lookups scan in
//! stored order and act on the first record whose id matches.

use crate::error::{KernelError, KernelResult};
use crate::storage::{Document, Fields, Record};
use crate::types::id::RecordId;

/// All records in stored order.
pub fn list_all(doc: &Document) -> &[Record] {
    &doc.carros
}

pub fn find_by_id(doc: &Document, id: RecordId) -> Option<&Record> {
    doc.carros.iter().find(|carro| carro.has_id(id))
}

fn position(doc: &Document, id: RecordId) -> Option<usize> {
    doc.carros.iter().position(|carro| carro.has_id(id))
}

/// Appends `{id, ...fields}` and returns the created record.
///
/// The id is `len + 1`, so after a delete it can collide with a stored one.
pub fn insert(doc: &mut Document, fields: Fields) -> Record {
    let id = RecordId::for_collection_len(doc.carros.len());
    let carro = Record::new(id, fields);
    doc.carros.push(carro.clone());
    carro
}

/// Merges `fields` onto the first record with `id` and returns it.
pub fn update_by_id(doc: &mut Document, id: RecordId, fields: Fields) -> KernelResult<&Record> {
    let idx = position(doc, id).ok_or(KernelError::NotFound)?;
    let carro = &mut doc.carros[idx];
    carro.merge(fields);
    Ok(carro)
}

/// Removes the first record with `id`, keeping the order of the rest.
pub fn delete_by_id(doc: &mut Document, id: RecordId) -> KernelResult<Record> {
    let idx = position(doc, id).ok_or(KernelError::NotFound)?;
    Ok(doc.carros.remove(idx))
}
