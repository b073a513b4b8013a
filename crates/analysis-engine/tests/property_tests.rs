//! Property-based tests for the matcher and the heading scan.

use analysis_engine::criteria::REQUIRED_HEADINGS;
use analysis_engine::headings::scan_headings;
use analysis_engine::matching::{count_words, fuzzy_match, truncate_words};
use analysis_engine::AnalysisEngine;
use proptest::prelude::*;

/// A short lowercase phrase of 1 to 4 words.
fn phrase() -> impl Strategy<Value = String> {
    proptest::collection::vec("[a-z]{1,10}", 1..=4).prop_map(|words| words.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn substring_presence_implies_match(
        prefix in "[a-z ]{0,40}",
        needle in phrase(),
        suffix in "[a-z ]{0,40}",
    ) {
        let text = format!("{prefix} {needle} {suffix}");
        prop_assert!(fuzzy_match(&text, &needle));
    }

    #[test]
    fn case_folding_is_symmetric(needle in phrase()) {
        prop_assert!(fuzzy_match(&needle.to_uppercase(), &needle));
        prop_assert!(fuzzy_match(&needle, &needle.to_uppercase()));
    }

    #[test]
    fn heading_scan_partitions_exactly(text in "[A-Za-z' ]{0,120}") {
        let scan = scan_headings(&text);

        prop_assert_eq!(
            scan.found.len() + scan.missing.len(),
            REQUIRED_HEADINGS.len()
        );
        // Order preserved: both sides are subsequences of the fixed list.
        let mut order = REQUIRED_HEADINGS.iter();
        for h in &scan.found {
            prop_assert!(order.any(|r| *r == h.as_str()));
        }
        let mut order = REQUIRED_HEADINGS.iter();
        for h in &scan.missing {
            prop_assert!(order.any(|r| *r == h.as_str()));
        }
        // Disjoint partition.
        for h in &scan.found {
            prop_assert!(!scan.missing.contains(h));
        }
    }

    #[test]
    fn completion_percent_stays_in_bounds(text in "[a-z' ]{1,200}") {
        let report = AnalysisEngine::new().analyze_text(&text).unwrap();
        if let Some(intro) = report.introduction {
            prop_assert!(intro.completion_percent <= 100);
            prop_assert!(intro.found_count <= intro.total_count);
        }
    }

    #[test]
    fn analysis_is_deterministic(text in "[A-Za-z' ]{1,200}") {
        let engine = AnalysisEngine::new();
        let first = engine.analyze_text(&text).unwrap();
        let second = engine.analyze_text(&text).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn truncation_never_exceeds_limit(text in "[a-z ]{0,400}", limit in 1usize..60) {
        let out = truncate_words(&text, limit);
        let body = out.trim_end_matches("...");
        prop_assert!(count_words(body) <= limit);
    }
}
