// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::error::StorageError;
use crate::storage::{Document, DocumentStore, FileStore, MemoryStore, Record};
use crate::types::id::RecordId;
use serde_json::json;
use tempfile::tempdir;

fn fields(value: serde_json::Value) -> crate::storage::Fields {
    value.as_object().cloned().unwrap()
}

#[test]
fn test_record_new_puts_id_first() {
    let carro = Record::new(RecordId(1), fields(json!({"marca": "Toyota", "id": 77})));
    let keys: Vec<&String> = carro.fields().keys().collect();
    assert_eq!(keys, vec!["id", "marca"]);
    assert_eq!(carro.id(), Some(&json!(1)));
}

#[test]
fn test_record_merge_is_shallow() {
    let mut carro = Record::new(RecordId(1), fields(json!({"marca": "Toyota", "extras": {"a": 1}})));
    carro.merge(fields(json!({"extras": {"b": 2}, "anio": 2020})));
    assert_eq!(
        serde_json::to_value(&carro).unwrap(),
        json!({"id": 1, "marca": "Toyota", "extras": {"b": 2}, "anio": 2020})
    );
}

#[test]
fn test_document_keeps_unknown_keys() {
    let raw = br#"{"carros":[{"id":1,"marca":"Ford"}],"version":3}"#;
    let doc = Document::from_slice(raw).unwrap();
    assert_eq!(doc.len(), 1);
    assert_eq!(doc.extra.get("version"), Some(&json!(3)));

    let out: serde_json::Value = serde_json::from_slice(&doc.to_vec().unwrap()).unwrap();
    assert_eq!(out, json!({"carros": [{"id": 1, "marca": "Ford"}], "version": 3}));
}

#[test]
fn test_document_requires_collection() {
    assert!(matches!(Document::from_slice(b"{}"), Err(StorageError::Parse(_))));
    assert!(matches!(Document::from_slice(b"{\"carros\": 5}"), Err(StorageError::Parse(_))));
    assert!(matches!(Document::from_slice(b"not json"), Err(StorageError::Parse(_))));
}

#[test]
fn test_file_store_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("db.json");
    let store = FileStore::new(&path);

    assert!(store.init_if_missing().unwrap());
    assert!(!store.init_if_missing().unwrap());
    assert!(store.load().unwrap().is_empty());

    let doc = Document::new(vec![Record::new(RecordId(1), fields(json!({"marca": "Toyota"})))]);
    store.save(&doc).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text, r#"{"carros":[{"id":1,"marca":"Toyota"}]}"#);
    assert_eq!(store.load().unwrap(), doc);
    assert!(!path.with_extension("tmp").exists());
}

#[test]
fn test_file_store_missing_and_corrupt() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("db.json");
    let store = FileStore::new(&path);

    match store.load() {
        Err(StorageError::Missing(p)) => assert_eq!(p, path),
        other => panic!("Expected Missing, got {:?}", other),
    }

    std::fs::write(&path, b"{\"carros\": [").unwrap();
    assert!(matches!(store.load(), Err(StorageError::Parse(_))));
}

#[test]
fn test_file_store_save_into_missing_dir_fails() {
    let dir = tempdir().unwrap();
    let store = FileStore::new(dir.path().join("nope").join("db.json"));
    let res = store.save(&Document::default());
    assert!(matches!(res, Err(StorageError::Io { .. })));
}

#[test]
fn test_memory_store_shares_state() {
    let store = MemoryStore::new();
    assert!(matches!(store.load(), Err(StorageError::Missing(_))));

    let handle = store.clone();
    store.save(&Document::default()).unwrap();
    assert_eq!(handle.raw().unwrap(), br#"{"carros":[]}"#.to_vec());

    handle.fail_saves(true);
    assert!(matches!(store.save(&Document::default()), Err(StorageError::Unavailable(_))));

    let corrupt = MemoryStore::from_raw("{oops");
    assert!(matches!(corrupt.load(), Err(StorageError::Parse(_))));
}
