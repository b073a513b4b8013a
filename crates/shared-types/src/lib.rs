pub mod types;

pub use types::{
    AnalysisReport, DissertationDocument, DocumentReport, DocumentStats, HeadingScan, ItemResult,
    SectionReport, Severity, Verdict,
};
