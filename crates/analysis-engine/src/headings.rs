//! Required-heading scan and the conclusion excerpt.

use crate::criteria::{CONCLUSION_HEADING, GENERAL_CONCLUSION_HEADING, REQUIRED_HEADINGS};
use crate::matching::{find_case_folded, fuzzy_match, truncate_words};
use shared_types::HeadingScan;

/// Excerpts are cut to this many words.
pub const EXCERPT_WORD_LIMIT: usize = 50;

/// Partition the required heading list into found and missing, preserving
/// list order within each side.
pub fn scan_headings(text: &str) -> HeadingScan {
    let mut found = Vec::new();
    let mut missing = Vec::new();

    for heading in REQUIRED_HEADINGS {
        if fuzzy_match(text, heading) {
            found.push(heading.to_string());
        } else {
            missing.push(heading.to_string());
        }
    }

    let conclusion_excerpt = if found.iter().any(|h| h == CONCLUSION_HEADING)
        && fuzzy_match(text, GENERAL_CONCLUSION_HEADING)
    {
        locate_conclusion_excerpt(text)
    } else {
        None
    };

    HeadingScan {
        found,
        missing,
        conclusion_excerpt,
    }
}

/// Take up to 50 words after the exact occurrence of
/// "UMUMIY XULOSA VA TAVSIYALAR".
///
/// The fuzzy gate in `scan_headings` can pass on word overlap alone, in
/// which case the exact locate here fails and no excerpt is produced.
/// Known quirk, kept as-is.
fn locate_conclusion_excerpt(text: &str) -> Option<String> {
    let (_, heading_end) = find_case_folded(text, GENERAL_CONCLUSION_HEADING)?;
    let after = text[heading_end..].trim();
    Some(truncate_words(after, EXCERPT_WORD_LIMIT))
}
