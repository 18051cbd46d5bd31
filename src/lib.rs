// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Typo-tolerant catalog search with tiered exact/fuzzy matching.
//!
//! A user types a free-text query against a small, pre-loaded catalog. The
//! engine first tries a case-insensitive substring match; when that fails it
//! falls back to bounded Levenshtein distance on the record name, with a typo
//! budget scaled to query length.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌───────────────────┐     ┌──────────────────┐
//! │ catalog.rs  │────▶│ search/tiered.rs  │────▶│  caller renders  │
//! │ (load,      │     │ (filter, classify,│     │  ordered matches │
//! │  validate)  │     │   max_edits)      │     │                  │
//! └─────────────┘     └───────────────────┘     └──────────────────┘
//!                              │
//!                              ▼
//!                     ┌───────────────────┐
//!                     │ fuzzy/levenshtein │
//!                     │ (levenshtein,     │
//!                     │  levenshtein_     │
//!                     │  bounded)         │
//!                     └───────────────────┘
//! ```
//!
//! The engine is pure: `filter` reads an immutable catalog slice and returns
//! an ordered subsequence of references. Loading and rendering live at the
//! edges (`catalog`, the CLI binary) and never leak into the tiers.
//!
//! # Usage
//!
//! ```
//! use lupa::{filter, Record};
//!
//! let catalog = vec![
//!     Record {
//!         name: "Microscope".to_string(),
//!         description: "Optical tool".to_string(),
//!         created: None,
//!         link: None,
//!     },
//! ];
//!
//! // Exact substring hit
//! assert_eq!(filter(&catalog, "microscop").len(), 1);
//! // Typo within the budget
//! assert_eq!(filter(&catalog, "mircoscope").len(), 1);
//! // Empty query: the "show everything" default
//! assert_eq!(filter(&catalog, "").len(), 1);
//! ```

// Module declarations
pub mod catalog;
mod fuzzy;
mod search;
pub mod testing;
mod types;
mod util;

// Re-exports for public API
pub use fuzzy::{levenshtein, levenshtein_bounded};
pub use search::{classify, filter, max_edits};
pub use types::{CatalogError, MatchOutcome, Record};
pub use util::normalize;
