//! Section extraction: slice the text between a section marker and the
//! next structural boundary.

use lazy_static::lazy_static;
use regex::Regex;

use crate::matching::find_case_folded;

lazy_static! {
    /// Start of the next structural part: a numbered chapter heading
    /// ("I BOB", "1-BOB", "II. BOB") or the main body ("ASOSIY QISM").
    static ref BOUNDARY_RE: Regex =
        Regex::new(r"(?i)\b(?:[ivx]+|\d+)\s*[-.]?\s*bob\b|asosiy\s+qism").unwrap();
}

/// Extract the body of the section opened by `marker`.
///
/// The marker is located case-insensitively; `None` when absent. The body
/// runs from the end of the marker to the first boundary match, or to the
/// end of the text. A boundary match at offset zero is ignored; truncating
/// there would leave an empty section.
pub fn extract_section<'a>(text: &'a str, marker: &str) -> Option<&'a str> {
    let (_, marker_end) = find_case_folded(text, marker)?;
    let body = &text[marker_end..];

    match BOUNDARY_RE.find(body) {
        Some(m) if m.start() > 0 => Some(&body[..m.start()]),
        _ => Some(body),
    }
}
