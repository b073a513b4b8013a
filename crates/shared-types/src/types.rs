#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DissertationDocument {
    pub id: String,
    pub filename: String,
    pub text_content: Vec<String>, // Per-page text
    pub created_at: u64,
}

/// Top-level result of checking one document.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DocumentReport {
    pub document_id: String,
    pub report: AnalysisReport,
    pub checked_at: u64,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnalysisReport {
    pub headings: HeadingScan,
    /// Present only when the "KIRISH" marker was located in the text.
    pub introduction: Option<SectionReport>,
    pub stats: DocumentStats,
}

/// Partition of the required heading list into found and missing,
/// both in original list order.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HeadingScan {
    pub found: Vec<String>,
    pub missing: Vec<String>,
    /// Up to 50 words following "UMUMIY XULOSA VA TAVSIYALAR".
    pub conclusion_excerpt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SectionReport {
    pub word_count: usize,
    pub results: Vec<ItemResult>,
    pub found_count: usize,
    pub total_count: usize,
    pub completion_percent: u8,
    pub verdict: Verdict,
    /// Presentation label for the verdict, carried so serialized reports
    /// need not re-derive the mapping.
    pub severity: Severity,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ItemResult {
    pub id: u32,
    pub name: String,
    /// Recommended minimum length; informational only, never enforced.
    pub min_words: u32,
    pub found: bool,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DocumentStats {
    pub word_count: usize,
    pub char_count: usize,
    pub heading_count: usize,
    pub total_headings: usize,
    /// round(100 × heading_count / total_headings).
    pub completion_percent: u8,
    /// First 50 words of the document text.
    pub content_excerpt: String,
}

/// Compliance band for a checklist completion percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Verdict {
    FullyCompliant,
    MostlyCompliant,
    PartiallyCompliant,
    NonCompliant,
}

impl Verdict {
    /// Tier bands, evaluated high to low: >=95, >=80, >=60, below.
    pub fn from_percent(percent: u8) -> Self {
        match percent {
            95..=u8::MAX => Verdict::FullyCompliant,
            80..=94 => Verdict::MostlyCompliant,
            60..=79 => Verdict::PartiallyCompliant,
            _ => Verdict::NonCompliant,
        }
    }

    pub fn assessment(&self) -> &'static str {
        match self {
            Verdict::FullyCompliant => {
                "Kirish qismi barcha talablarga to'liq javob beradi!"
            }
            Verdict::MostlyCompliant => {
                "Kirish qismi talablarga asosan javob beradi, ayrim bo'limlarni to'ldirish lozim."
            }
            Verdict::PartiallyCompliant => {
                "Kirish qismi talablarga qisman javob beradi, bir qancha bo'limlar yetishmaydi."
            }
            Verdict::NonCompliant => {
                "Kirish qismi talablarga javob bermaydi, qayta ishlash talab etiladi."
            }
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Verdict::FullyCompliant => Severity::Success,
            Verdict::MostlyCompliant | Verdict::PartiallyCompliant => Severity::Warning,
            Verdict::NonCompliant => Severity::Error,
        }
    }
}

/// Presentation label attached to a verdict tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Severity {
    Success,
    Warning,
    Error,
}
