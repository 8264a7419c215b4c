//! Document upload → plain text.

use axum::{extract::Multipart, Json};
use serde::Serialize;

use policyscan_ingestion::extract_text;

use crate::error::{ApiError, ANALYSIS_FAILED_MESSAGE};

/// Multipart field carrying the uploaded file.
pub const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct ParsedDocument {
    pub text: String,
}

/// POST /api/parse-document
pub async fn parse_document(mut multipart: Multipart) -> Result<Json<ParsedDocument>, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await?;
        tracing::debug!(file_name = %file_name, bytes = bytes.len(), "Document uploaded");

        let text = tokio::task::spawn_blocking(move || extract_text(&file_name, &bytes))
            .await
            .map_err(|e| ApiError::internal(ANALYSIS_FAILED_MESSAGE, e.to_string()))??;
        return Ok(Json(ParsedDocument { text }));
    }
    Err(ApiError::MissingFile)
}
