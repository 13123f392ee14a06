// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::config::NodeConfig;
use crate::errors::EngineError;
use carros_kernel::repository;
use carros_kernel::storage::{Document, DocumentStore, Fields, FileStore, Record};
use carros_kernel::types::id::RecordId;

/// Runs one load → repository operation → save cycle per call.
///
/// The engine keeps no document between calls; the store is the only state.
/// Callers must serialize mutating calls if they share a store.
pub struct Engine {
    store: Box<dyn DocumentStore>,
}

impl Engine {
    pub fn new<S: DocumentStore + 'static>(store: S) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    /// File-backed engine at `cfg.db_path`, seeding it first when `init_db` is set.
    pub fn from_config(cfg: &NodeConfig) -> Result<Self, EngineError> {
        let store = FileStore::new(cfg.db_path.clone());
        if cfg.init_db && store.init_if_missing()? {
            tracing::info!("Created empty document at {:?}", store.path());
        }
        Ok(Self::new(store))
    }

    pub fn list(&self) -> Result<Vec<Record>, EngineError> {
        let doc = self.load("list")?;
        Ok(repository::list_all(&doc).to_vec())
    }

    /// `None` when no record matches, including unparsable ids.
    pub fn get(&self, id: Option<RecordId>) -> Result<Option<Record>, EngineError> {
        let doc = self.load("get")?;
        Ok(id.and_then(|id| repository::find_by_id(&doc, id)).cloned())
    }

    pub fn create(&self, fields: Fields) -> Result<Record, EngineError> {
        let mut doc = self.load("create")?;
        let carro = repository::insert(&mut doc, fields);
        self.save("create", &doc)?;
        tracing::debug!("Created carro {:?}", carro.id());
        Ok(carro)
    }

    pub fn update(&self, id: Option<RecordId>, fields: Fields) -> Result<Record, EngineError> {
        let mut doc = self.load("update")?;
        let id = id.ok_or(EngineError::NotFound)?;
        let carro = repository::update_by_id(&mut doc, id, fields)?.clone();
        self.save("update", &doc)?;
        tracing::debug!("Updated carro {}", id);
        Ok(carro)
    }

    pub fn delete(&self, id: Option<RecordId>) -> Result<Record, EngineError> {
        let mut doc = self.load("delete")?;
        let id = id.ok_or(EngineError::NotFound)?;
        let carro = repository::delete_by_id(&mut doc, id)?;
        self.save("delete", &doc)?;
        tracing::debug!("Deleted carro {}", id);
        Ok(carro)
    }

    fn load(&self, op: &'static str) -> Result<Document, EngineError> {
        match self.store.load() {
            Ok(doc) => {
                metrics::gauge!("carros_records", doc.len() as f64);
                Ok(doc)
            }
            Err(e) => {
                metrics::counter!("carros_storage_errors_total", 1, "op" => op);
                tracing::error!("Failed to load document for {}: {}", op, e);
                Err(e.into())
            }
        }
    }

    fn save(&self, op: &'static str, doc: &Document) -> Result<(), EngineError> {
        if let Err(e) = self.store.save(doc) {
            metrics::counter!("carros_storage_errors_total", 1, "op" => op);
            tracing::error!("Failed to save document after {}, changes may be lost: {}", op, e);
            return Err(e.into());
        }
        metrics::gauge!("carros_records", doc.len() as f64);
        Ok(())
    }
}
