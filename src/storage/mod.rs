// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Persistent state: the document, its records, and the stores that hold it.

pub mod record;
pub mod document;
pub mod store;

pub use document::Document;
pub use record::{Fields, Record};
pub use store::{DocumentStore, FileStore, MemoryStore};
