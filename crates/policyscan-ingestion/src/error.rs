use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported file type: {0}")]
    UnsupportedExtension(String),
    #[error("PDF error: {0}")]
    Pdf(String),
    #[error("No text could be extracted from the document")]
    NoText,
}
