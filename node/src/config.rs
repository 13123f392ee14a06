// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use carros_kernel::config::DEFAULT_DB_PATH;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

pub const ENV_BIND_ADDR: &str = "CARROS_BIND_ADDR";
pub const ENV_DB_PATH: &str = "CARROS_DB_PATH";
pub const ENV_INIT_DB: &str = "CARROS_INIT_DB";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?} ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct NodeConfig {
    pub bind_addr: SocketAddr,
    /// JSON document holding the collection.
    pub db_path: PathBuf,
    /// Seed an empty document at startup when the file is missing.
    pub init_db: bool,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, 3000)),
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            init_db: false,
        }
    }
}

impl NodeConfig {
    /// Defaults overridden by `CARROS_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(value) = lookup(ENV_BIND_ADDR) {
            cfg.bind_addr = value.parse().map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                key: ENV_BIND_ADDR,
                reason: e.to_string(),
                value,
            })?;
        }
        if let Some(value) = lookup(ENV_DB_PATH) {
            if value.is_empty() {
                return Err(ConfigError::Invalid {
                    key: ENV_DB_PATH,
                    value,
                    reason: "empty path".into(),
                });
            }
            cfg.db_path = PathBuf::from(value);
        }
        if let Some(value) = lookup(ENV_INIT_DB) {
            cfg.init_db = parse_flag(&value).ok_or_else(|| ConfigError::Invalid {
                key: ENV_INIT_DB,
                value: value.clone(),
                reason: "expected true or false".into(),
            })?;
        }

        Ok(cfg)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let cfg = NodeConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, NodeConfig::default());
        assert_eq!(cfg.bind_addr.port(), 3000);
        assert_eq!(cfg.db_path, PathBuf::from("./db.json"));
        assert!(!cfg.init_db);
    }

    #[test]
    fn test_overrides() {
        let cfg = NodeConfig::from_lookup(lookup(&[
            (ENV_BIND_ADDR, "127.0.0.1:8080"),
            (ENV_DB_PATH, "/tmp/carros.json"),
            (ENV_INIT_DB, "Yes"),
        ]))
        .unwrap();
        assert_eq!(cfg.bind_addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(cfg.db_path, PathBuf::from("/tmp/carros.json"));
        assert!(cfg.init_db);
    }

    #[test]
    fn test_invalid_values() {
        assert!(NodeConfig::from_lookup(lookup(&[(ENV_BIND_ADDR, "nowhere")])).is_err());
        assert!(NodeConfig::from_lookup(lookup(&[(ENV_DB_PATH, "")])).is_err());
        assert!(NodeConfig::from_lookup(lookup(&[(ENV_INIT_DB, "maybe")])).is_err());
    }
}
