// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String utilities shared by both match tiers.

pub mod normalize;

pub use normalize::normalize;
