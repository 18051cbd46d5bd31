// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search policy: where the rubber meets the road.
//!
//! The two-tier strategy (exact → fuzzy) ensures cheap substring hits come
//! back untouched by typo tolerance, and typos still find their record.

pub mod tiered;

pub use tiered::{filter, classify, max_edits};
