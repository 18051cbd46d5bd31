// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The catalog-loading boundary.
//!
//! Loads a JSON array of records from disk and validates the Record contract
//! before anything reaches the engine. Malformed input is a boundary error,
//! not something `filter` recovers from - by the time a catalog crosses this
//! function, every record is well-formed.
//!
//! The catalog is an explicit handle: load it once, keep the `Vec<Record>`
//! wherever the caller likes, and pass a slice into `filter` per query. No
//! module-level cache, no hidden state.

use crate::types::{CatalogError, Record};
use std::fs;
use std::path::Path;

/// Load and validate a catalog from a JSON file.
///
/// The file must contain a JSON array of record objects. Each record needs a
/// non-empty `name` and a `description` (possibly empty); `created` and
/// `link` are optional display fields.
pub fn load(path: &Path) -> Result<Vec<Record>, CatalogError> {
    let raw = fs::read_to_string(path)?;
    let records: Vec<Record> = serde_json::from_str(&raw)?;
    validate(&records)?;
    Ok(records)
}

/// Check the Record contract over an already-deserialized catalog.
///
/// Serde already guarantees the required fields exist; this catches the
/// contract violations JSON can still express, like `"name": ""`.
pub fn validate(records: &[Record]) -> Result<(), CatalogError> {
    for (index, record) in records.iter().enumerate() {
        if record.name.trim().is_empty() {
            return Err(CatalogError::InvalidRecord {
                index,
                reason: "name must be non-empty".to_string(),
            });
        }
    }
    Ok(())
}
