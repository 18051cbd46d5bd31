// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::Record;

/// Create a test record with the display fields filled in.
///
/// This is the canonical implementation used across all tests.
pub fn make_record(name: &str, description: &str) -> Record {
    Record {
        name: name.to_string(),
        description: description.to_string(),
        created: Some("2024-01-01".to_string()),
        link: Some(format!(
            "https://example.org/{}",
            name.to_lowercase().replace(' ', "-")
        )),
    }
}

/// Create a minimal test record with no display fields.
pub fn make_record_bare(name: &str, description: &str) -> Record {
    Record {
        name: name.to_string(),
        description: description.to_string(),
        created: None,
        link: None,
    }
}
