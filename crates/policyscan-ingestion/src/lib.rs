//! policyscan-ingestion — plain-text extraction from uploaded documents.
//!
//! Supported inputs are `.txt` (UTF-8, lossy) and `.pdf`. The file kind is
//! decided from the file name alone, before any bytes are inspected.

pub mod error;
pub mod pdf_parser;

pub use error::ExtractionError;

use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Text,
    Pdf,
}

impl DocumentKind {
    /// Extension match is case-insensitive; anything but `.txt` / `.pdf` is
    /// rejected.
    pub fn from_file_name(name: &str) -> Result<Self, ExtractionError> {
        let ext = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("txt") => Ok(DocumentKind::Text),
            Some("pdf") => Ok(DocumentKind::Pdf),
            _ => Err(ExtractionError::UnsupportedExtension(name.to_string())),
        }
    }
}

/// Extract the text of an uploaded file.
pub fn extract_text(file_name: &str, bytes: &[u8]) -> Result<String, ExtractionError> {
    let kind = DocumentKind::from_file_name(file_name)?;
    let text = match kind {
        DocumentKind::Text => String::from_utf8_lossy(bytes).into_owned(),
        DocumentKind::Pdf => pdf_parser::extract_pdf_text(bytes)?,
    };
    if text.trim().is_empty() {
        return Err(ExtractionError::NoText);
    }
    tracing::debug!(?kind, bytes = bytes.len(), chars = text.chars().count(), "Document text extracted");
    Ok(text)
}
