//! PDF text extraction.
//!
//! lopdf is tried first. When it cannot load the file, or finds no text, the
//! raw bytes are scanned for uncompressed text objects (`BT … ET`) and the
//! string operands of `Tj` / `TJ` are collected.

use std::sync::OnceLock;

use lopdf::Document;
use regex::Regex;

use crate::error::ExtractionError;

fn text_object_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)BT\s(.*?)ET").unwrap())
}

fn show_text_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\(([^)]*)\)\s*Tj").unwrap())
}

fn show_array_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[([^\]]*)\]\s*TJ").unwrap())
}

fn string_operand_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\(([^)]*)\)").unwrap())
}

fn whitespace_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").unwrap())
}

/// Extract text from PDF bytes. Fails with [`ExtractionError::NoText`] when
/// neither strategy finds anything.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    match extract_with_lopdf(bytes) {
        Ok(text) if !text.is_empty() => return Ok(text),
        Ok(_) => tracing::debug!("lopdf found no text, scanning content streams"),
        Err(e) => tracing::debug!(error = %e, "lopdf extraction failed, scanning content streams"),
    }

    let text = scrape_text_objects(bytes);
    if text.is_empty() {
        tracing::warn!(bytes = bytes.len(), "No text found in PDF");
        return Err(ExtractionError::NoText);
    }
    Ok(text)
}

fn extract_with_lopdf(bytes: &[u8]) -> Result<String, ExtractionError> {
    let doc = Document::load_mem(bytes).map_err(|e| ExtractionError::Pdf(e.to_string()))?;
    let pages: Vec<u32> = doc.get_pages().keys().copied().collect();
    if pages.is_empty() {
        return Err(ExtractionError::Pdf("document has no pages".to_string()));
    }
    let text = doc.extract_text(&pages).map_err(|e| ExtractionError::Pdf(e.to_string()))?;
    Ok(collapse(&text))
}

/// Scan raw PDF bytes (read as Latin-1) for text-showing operators.
pub fn scrape_text_objects(bytes: &[u8]) -> String {
    let content: String = bytes.iter().map(|&b| b as char).collect();
    let mut parts: Vec<&str> = Vec::new();

    for block in text_object_regex().captures_iter(&content) {
        let Some(body) = block.get(1) else { continue };
        let body = body.as_str();
        for shown in show_text_regex().captures_iter(body) {
            parts.push(shown.get(1).map_or("", |m| m.as_str()));
        }
        for array in show_array_regex().captures_iter(body) {
            let items = array.get(1).map_or("", |m| m.as_str());
            for operand in string_operand_regex().captures_iter(items) {
                parts.push(operand.get(1).map_or("", |m| m.as_str()));
            }
        }
    }

    let joined = parts.join(" ").replace("\\n", "\n").replace("\\r", "");
    collapse(&joined)
}

fn collapse(text: &str) -> String {
    whitespace_regex().replace_all(text, " ").trim().to_string()
}
