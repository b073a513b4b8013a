use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("No content to analyze: the document text is empty")]
    EmptyDocument,
}
