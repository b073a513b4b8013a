//! Fuzzy keyword matching and word-level text helpers
//!
//! Matching is purely textual: lowercase folding plus substring tests,
//! sensitive to punctuation and exact spelling within each word. No
//! Unicode normalization beyond case folding.

/// Share of phrase words that must appear in the text for a partial match.
const PARTIAL_MATCH_RATIO: f64 = 0.8;

/// Decide whether `phrase` is present in `text`.
///
/// Two branches: an exact (case-folded) substring test, then an 80%
/// word-overlap fallback for paraphrased or reordered headings. Both the
/// heading scan and the checklist evaluator go through this single
/// function so the two paths cannot drift apart.
///
/// A phrase with no whitespace-delimited words requires zero matches and
/// trivially returns true; callers must not pass one.
pub fn fuzzy_match(text: &str, phrase: &str) -> bool {
    let text_lower = text.to_lowercase();
    let phrase_lower = phrase.to_lowercase();

    if text_lower.contains(&phrase_lower) {
        return true;
    }

    let phrase_words: Vec<&str> = phrase_lower.split_whitespace().collect();
    let required = (phrase_words.len() as f64 * PARTIAL_MATCH_RATIO).ceil() as usize;

    // Repeated words count once per occurrence, not once per distinct word.
    let matched = phrase_words
        .iter()
        .filter(|word| text_lower.contains(**word))
        .count();

    matched >= required
}

/// Case-insensitively locate `phrase` in `text`, returning byte offsets
/// into `text` itself.
///
/// `str::to_lowercase` is not length-preserving ("İ" is 2 bytes, its
/// lowercase form 3), so an offset found in a lowercased copy cannot be
/// used to slice the original. This scans the original instead; matches
/// are anchored to its character boundaries.
pub fn find_case_folded(text: &str, phrase: &str) -> Option<(usize, usize)> {
    let needle = phrase.to_lowercase();
    if needle.is_empty() {
        return Some((0, 0));
    }
    for (start, _) in text.char_indices() {
        if let Some(len) = folded_prefix_len(&text[start..], &needle) {
            return Some((start, start + len));
        }
    }
    None
}

/// Byte length of the prefix of `rest` whose lowercase form equals
/// `needle`, if there is one.
fn folded_prefix_len(rest: &str, needle: &str) -> Option<usize> {
    let mut folded = String::with_capacity(needle.len());
    for (idx, c) in rest.char_indices() {
        folded.extend(c.to_lowercase());
        if !needle.starts_with(folded.as_str()) {
            return None;
        }
        if folded.len() == needle.len() {
            return Some(idx + c.len_utf8());
        }
    }
    None
}

/// Number of whitespace-delimited non-empty tokens.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Keep the first `limit` words, appending "..." when anything was cut.
/// Whitespace runs are collapsed to single spaces either way.
pub fn truncate_words(text: &str, limit: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() > limit {
        format!("{}...", words[..limit].join(" "))
    } else {
        words.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_substring_matches() {
        assert!(fuzzy_match("Dissertatsiya KIRISH qismidan boshlanadi", "KIRISH"));
        assert!(fuzzy_match("umumiy xulosa va tavsiyalar keltirildi", "UMUMIY XULOSA"));
    }

    #[test]
    fn test_case_folded_substring_matches() {
        assert!(fuzzy_match("annotatsiya berilgan", "ANNOTATSIYA"));
        assert!(fuzzy_match("ANNOTATSIYA BERILGAN", "annotatsiya"));
    }

    #[test]
    fn test_empty_text_never_matches() {
        assert!(!fuzzy_match("", "KIRISH"));
        assert!(!fuzzy_match("", "UMUMIY XULOSA VA TAVSIYALAR"));
    }

    #[test]
    fn test_word_overlap_fallback() {
        // 4 of 4 phrase words present as substrings, but never contiguously.
        let text = "umumiy holatda xulosa hamda va alohida tavsiyalar berildi";
        assert!(fuzzy_match(text, "UMUMIY XULOSA VA TAVSIYALAR"));
    }

    #[test]
    fn test_below_80_percent_overlap_fails() {
        // 7-word phrase needs ceil(5.6) = 6 word hits; only 4 here.
        let phrase = "ILMIY TADQIQOT ISHI MAVZUSI BO'YICHA ANALITIK TAHLIL";
        let text = "ilmiy tadqiqot ishi mavzusi haqida gap boradi";
        assert!(!fuzzy_match(text, phrase));
    }

    #[test]
    fn test_at_80_percent_overlap_passes() {
        // 5-word phrase needs ceil(4.0) = 4 word hits.
        let phrase = "bitta ikki uch turt besh";
        let text = "bitta ikki uch turt oltmish";
        assert!(fuzzy_match(text, phrase));
    }

    #[test]
    fn test_repeated_phrase_words_counted_per_occurrence() {
        // "ish ish yangi": "ish" matches twice, 2 of 3 words, below ceil(2.4) = 3.
        assert!(!fuzzy_match("ish boshlandi", "ish ish yangi"));
        // With "yangi" present too, 3 of 3 words pass.
        assert!(fuzzy_match("yangi ish boshlandi", "ish ish yangi"));
    }

    #[test]
    fn test_find_case_folded_returns_original_offsets() {
        assert_eq!(find_case_folded("matn KIRISH qismi", "kirish"), Some((5, 11)));
        assert_eq!(find_case_folded("matn kirish qismi", "KIRISH"), Some((5, 11)));
        assert_eq!(find_case_folded("matn xolos", "KIRISH"), None);
    }

    #[test]
    fn test_find_case_folded_survives_length_changing_lowercase() {
        // "İ" (U+0130) is 2 bytes but lowercases to 3; offsets must still
        // index into the original text.
        let text = "İİİİİİ KIRISH mavzu";
        let (start, end) = find_case_folded(text, "kirish").unwrap();
        assert_eq!(&text[start..end], "KIRISH");
        assert_eq!(&text[end..], " mavzu");
    }

    #[test]
    fn test_count_words() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   "), 0);
        assert_eq!(count_words("bir  ikki\nuch"), 3);
    }

    #[test]
    fn test_truncate_words_under_limit() {
        assert_eq!(truncate_words("bir  ikki uch", 50), "bir ikki uch");
    }

    #[test]
    fn test_truncate_words_over_limit() {
        let text = (0..60).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ");
        let out = truncate_words(&text, 50);
        assert!(out.ends_with("..."));
        assert_eq!(out.trim_end_matches("...").split_whitespace().count(), 50);
    }
}
