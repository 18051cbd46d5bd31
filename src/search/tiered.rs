// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The two-tier search core: exact → fuzzy.
//!
//! Tier 1 (exact) is a case-insensitive substring check over the name and
//! description. It runs first because it is cheap and must never be shadowed
//! by a fuzzy false-negative: if you type "microscop" and a record is called
//! "Microscope", that's a hit, full stop. Tier 2 (fuzzy) runs only when the
//! exact tier fails, and only against the name - descriptions are long free
//! text, where the O(nm) DP costs the most and approximate hits mean the
//! least.
//!
//! `filter` is a pure function over an immutable catalog snapshot. It holds
//! no state between calls, so callers can debounce, cancel, or re-run it on
//! every keystroke without any locking discipline in here.

use crate::fuzzy::levenshtein_bounded;
use crate::types::{MatchOutcome, Record};
use crate::util::normalize;

/// Typo budget for the fuzzy tier, scaled to query length.
///
/// One edit for queries of up to 5 characters, two beyond that. Lengths are
/// Unicode scalar counts, matching the distance functions.
pub fn max_edits(query: &str) -> usize {
    if query.chars().count() <= 5 {
        1
    } else {
        2
    }
}

/// Decide how one record relates to a query.
///
/// `query` must already be normalized (see [`normalize`](crate::normalize));
/// `filter` does this once per call instead of once per record. `max` is the
/// fuzzy tier's edit budget, usually [`max_edits`] of the query.
pub fn classify(record: &Record, query: &str, max: usize) -> MatchOutcome {
    let name = normalize(&record.name);

    // Tier 1: exact substring over name or description, no tolerance.
    if name.contains(query) || normalize(&record.description).contains(query) {
        return MatchOutcome::Exact;
    }

    // Tier 2: bounded edit distance, name only.
    match levenshtein_bounded(&name, query, max) {
        Some(distance) => MatchOutcome::Fuzzy { distance },
        None => MatchOutcome::NoMatch,
    }
}

/// Filter a catalog against a free-text query.
///
/// Returns the ordered subsequence of `catalog` accepted by [`classify`],
/// preserving the catalog's relative order - no sorting, no relevance
/// ranking. An empty (or whitespace-only) query is the "show everything"
/// default and returns the full catalog without invoking either tier.
///
/// The result borrows from `catalog`: every element is a reference into the
/// slice passed in, recomputed from scratch on each call.
pub fn filter<'a>(catalog: &'a [Record], query: &str) -> Vec<&'a Record> {
    let query = normalize(query);
    if query.is_empty() {
        return catalog.iter().collect();
    }

    let max = max_edits(&query);
    catalog
        .iter()
        .filter(|record| classify(record, &query, max).is_match())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::make_record;

    #[test]
    fn test_max_edits_thresholds() {
        assert_eq!(max_edits("a"), 1);
        assert_eq!(max_edits("table"), 1); // 5 chars, still the small budget
        assert_eq!(max_edits("tables"), 2); // 6 chars
        assert_eq!(max_edits("mircoscope"), 2);
    }

    #[test]
    fn test_max_edits_counts_chars_not_bytes() {
        // 5 scalars, 7 bytes - must get the short-query budget
        assert_eq!(max_edits("caféé"), 1);
    }

    #[test]
    fn test_classify_exact_on_name() {
        let record = make_record("Microscope", "Optical tool");
        assert_eq!(classify(&record, "microscop", 2), MatchOutcome::Exact);
    }

    #[test]
    fn test_classify_exact_on_description() {
        let record = make_record("Microscope", "Optical tool");
        assert_eq!(classify(&record, "optical", 2), MatchOutcome::Exact);
    }

    #[test]
    fn test_classify_exact_wins_over_fuzzy() {
        // Zero-distance names are substring hits; they must report Exact,
        // not Fuzzy { distance: 0 }.
        let record = make_record("Lens", "Glass element");
        assert_eq!(classify(&record, "lens", 1), MatchOutcome::Exact);
    }

    #[test]
    fn test_classify_fuzzy_on_name() {
        let record = make_record("Microscope", "Optical tool");
        assert_eq!(
            classify(&record, "mircoscope", 2),
            MatchOutcome::Fuzzy { distance: 2 }
        );
    }

    #[test]
    fn test_classify_fuzzy_never_reads_description() {
        // "optcal" is 1 edit from "optical" in the description, but the
        // fuzzy tier only sees the name.
        let record = make_record("Microscope", "Optical tool");
        assert_eq!(classify(&record, "optcal", 2), MatchOutcome::NoMatch);
    }

    #[test]
    fn test_classify_over_budget() {
        let record = make_record("Table", "Furniture");
        // "tabel" is distance 2 (delete + insert) with budget 1
        assert_eq!(classify(&record, "tabel", 1), MatchOutcome::NoMatch);
    }

    #[test]
    fn test_filter_empty_query_returns_all() {
        let catalog = vec![
            make_record("Microscope", "Optical tool"),
            make_record("Telescope", "Viewing device"),
        ];
        let all = filter(&catalog, "");
        assert_eq!(all.len(), 2);
        let all_ws = filter(&catalog, "   \t");
        assert_eq!(all_ws.len(), 2);
    }

    #[test]
    fn test_filter_preserves_catalog_order() {
        let catalog = vec![
            make_record("Zoom lens", "telephoto"),
            make_record("Aperture ring", "telephoto"),
            make_record("Tripod", "telephoto"),
        ];
        let results = filter(&catalog, "telephoto");
        let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
        // Input order, not alphabetical
        assert_eq!(names, vec!["Zoom lens", "Aperture ring", "Tripod"]);
    }

    #[test]
    fn test_filter_no_matches_is_empty_not_error() {
        let catalog = vec![make_record("Microscope", "Optical tool")];
        assert!(filter(&catalog, "xyz").is_empty());
    }
}
