// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::types::id::RecordId;
use serde_json::json;

#[test]
fn test_parse_plain_integers() {
    assert_eq!(RecordId::parse("1"), Some(RecordId(1)));
    assert_eq!(RecordId::parse("42"), Some(RecordId(42)));
    assert_eq!(RecordId::parse("-3"), Some(RecordId(-3)));
    assert_eq!(RecordId::parse("+7"), Some(RecordId(7)));
    assert_eq!(RecordId::parse("  9"), Some(RecordId(9)));
}

#[test]
fn test_parse_stops_at_first_non_digit() {
    assert_eq!(RecordId::parse("12abc"), Some(RecordId(12)));
    assert_eq!(RecordId::parse("1.5"), Some(RecordId(1)));
    assert_eq!(RecordId::parse("0x1A"), Some(RecordId(26)));
}

#[test]
fn test_parse_rejects_non_numeric() {
    assert_eq!(RecordId::parse(""), None);
    assert_eq!(RecordId::parse("abc"), None);
    assert_eq!(RecordId::parse("-"), None);
    assert_eq!(RecordId::parse("0x"), None);
    assert_eq!(RecordId::parse("99999999999999999999999"), None);
}

#[test]
fn test_matches_numbers_only() {
    let id = RecordId(2);
    assert!(id.matches(&json!(2)));
    assert!(id.matches(&json!(2.0)));
    assert!(!id.matches(&json!(3)));
    assert!(!id.matches(&json!("2")));
    assert!(!id.matches(&json!(null)));
}

#[test]
fn test_id_for_collection_len() {
    assert_eq!(RecordId::for_collection_len(0), RecordId(1));
    assert_eq!(RecordId::for_collection_len(5), RecordId(6));
}
