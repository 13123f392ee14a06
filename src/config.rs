// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Configuration constants.

/// Field carrying the record id.
pub const ID_FIELD: &str = "id";

/// Backing file used when nothing else is configured.
pub const DEFAULT_DB_PATH: &str = "./db.json";

/// Contents written when seeding an empty document.
pub const EMPTY_DOCUMENT: &str = r#"{"carros":[]}"#;
