// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! Two entry points: `levenshtein` computes the exact distance, and
//! `levenshtein_bounded` answers the bounded question the engine actually
//! asks, with early exits that skip most of the DP for clear non-matches.

mod levenshtein;

pub use levenshtein::*;
