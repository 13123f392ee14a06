// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.

//! carros-kernel: the document store and record repository behind the carros service.

pub mod config;
pub mod error;
pub mod types;
pub mod storage;
pub mod repository;

#[cfg(test)]
pub mod tests;
