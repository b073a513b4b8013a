//! Dissertation compliance analysis.
//!
//! Pure text-analysis core: scans extracted dissertation text for the
//! required top-level headings, extracts the Introduction ("KIRISH")
//! section, evaluates its fixed checklist, and aggregates everything into
//! an [`shared_types::AnalysisReport`]. Text extraction (PDF/DOCX) and
//! rendering are external collaborators; the engine takes a UTF-8 string
//! and returns structured results.

pub mod checklist;
pub mod criteria;
pub mod error;
pub mod export;
pub mod headings;
pub mod matching;
pub mod sections;

use shared_types::{AnalysisReport, DissertationDocument, DocumentReport, DocumentStats};

pub use error::AnalysisError;

/// AnalysisEngine entry point
pub struct AnalysisEngine;

impl AnalysisEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze_document(
        &self,
        document: &DissertationDocument,
    ) -> Result<DocumentReport, AnalysisError> {
        // Combine all pages into a single text for analysis
        let full_text = document.text_content.join("\n");
        let report = self.analyze_text(&full_text)?;

        Ok(DocumentReport {
            document_id: document.id.clone(),
            report,
            checked_at: chrono::Utc::now().timestamp() as u64,
        })
    }

    /// Analyze raw text. Everything is recomputed from scratch; two calls
    /// on identical text produce identical reports.
    pub fn analyze_text(&self, text: &str) -> Result<AnalysisReport, AnalysisError> {
        if text.is_empty() {
            return Err(AnalysisError::EmptyDocument);
        }

        let headings = headings::scan_headings(text);

        let introduction = sections::extract_section(text, criteria::INTRODUCTION_MARKER)
            .map(checklist::evaluate);

        let heading_count = headings.found.len();
        let total_headings = criteria::REQUIRED_HEADINGS.len();
        let stats = DocumentStats {
            word_count: matching::count_words(text),
            char_count: text.chars().count(),
            heading_count,
            total_headings,
            completion_percent: ((heading_count as f64 / total_headings as f64) * 100.0).round()
                as u8,
            content_excerpt: matching::truncate_words(text, headings::EXCERPT_WORD_LIMIT),
        };

        Ok(AnalysisReport {
            headings,
            introduction,
            stats,
        })
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}
