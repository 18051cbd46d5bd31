// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a catalog search.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Record**: `name` is non-empty. The loader enforces this at the
//!   boundary (`catalog::load`); the engine assumes it and stays total.
//! - **Filter results**: every returned reference points into the catalog
//!   slice passed in, in the same relative order. No copies, no re-ranking.
//!
//! `MatchOutcome` makes the tier decision a first-class value instead of an
//! early return buried in a closure, so the threshold policy and the tier
//! ordering can be tested on their own.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One catalog entry.
///
/// The engine matches against `name` (both tiers) and `description` (exact
/// tier only). `created` and `link` are display-only: they ride along for the
/// rendering collaborator and are never inspected by any tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Item name; the fuzzy tier's only target.
    pub name: String,
    /// Longer free text; exact substring tier only.
    pub description: String,
    /// Opaque display field (e.g. a creation date).
    #[serde(default)]
    pub created: Option<String>,
    /// Opaque display field (e.g. a reference URL).
    #[serde(default)]
    pub link: Option<String>,
}

/// Per-record decision from the two-tier policy.
///
/// Ordering of the tiers is part of the contract: `Exact` is checked first
/// and can never be shadowed by a fuzzy false-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Normalized query is a substring of the name or description.
    Exact,
    /// Name is within the typo budget of the query.
    Fuzzy {
        /// Edit distance between the name and the query.
        distance: usize,
    },
    /// Neither tier accepted the record.
    NoMatch,
}

impl MatchOutcome {
    /// Does this outcome admit the record into the result set?
    #[inline]
    pub fn is_match(self) -> bool {
        !matches!(self, MatchOutcome::NoMatch)
    }
}

/// Errors from the catalog-loading boundary.
///
/// The matching core has no error taxonomy - `levenshtein` and `filter` are
/// total. Everything that can go wrong happens while getting records into
/// memory, and it surfaces here, before the engine is ever invoked.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog file is not a well-formed JSON array of records.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// A record violates the Record contract.
    #[error("invalid record at index {index}: {reason}")]
    InvalidRecord {
        /// Position of the offending record in the file.
        index: usize,
        /// What the record is missing.
        reason: String,
    },
}
