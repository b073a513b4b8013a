//! Checklist evaluation for the Introduction section.

use crate::criteria::{ChecklistItem, INTRODUCTION_CHECKLIST};
use crate::matching::{count_words, fuzzy_match};
use shared_types::{ItemResult, SectionReport, Verdict};

/// Evaluate the Introduction checklist against an extracted section body.
pub fn evaluate(section_text: &str) -> SectionReport {
    evaluate_items(section_text, INTRODUCTION_CHECKLIST)
}

pub(crate) fn evaluate_items(section_text: &str, items: &[ChecklistItem]) -> SectionReport {
    let results: Vec<ItemResult> = items
        .iter()
        .map(|item| ItemResult {
            id: item.id,
            name: item.name.to_string(),
            min_words: item.min_words,
            found: item_found(section_text, item),
        })
        .collect();

    let found_count = results.iter().filter(|r| r.found).count();
    let total_count = results.len();
    let completion_percent = if total_count == 0 {
        0
    } else {
        ((found_count as f64 / total_count as f64) * 100.0).round() as u8
    };

    let verdict = Verdict::from_percent(completion_percent);
    SectionReport {
        word_count: count_words(section_text),
        results,
        found_count,
        total_count,
        completion_percent,
        verdict,
        severity: verdict.severity(),
    }
}

/// Any trigger keyword suffices; the item's full name is an independent
/// second check. The minimum word count is never part of the decision.
fn item_found(section_text: &str, item: &ChecklistItem) -> bool {
    item.keywords.iter().any(|kw| fuzzy_match(section_text, kw))
        || fuzzy_match(section_text, item.name)
}
