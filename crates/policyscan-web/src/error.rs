//! API error type with automatic JSON error responses.
//!
//! Bodies are `{"error": "<message>"}`. Internal details are logged, never
//! returned to the client.

use axum::extract::multipart::MultipartError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use policyscan_common::PolicyScanError;
use policyscan_db::HistoryError;
use policyscan_ingestion::ExtractionError;

pub const TOO_SHORT_MESSAGE: &str = "Policy text is too short. Please provide more content.";
pub const UNSUPPORTED_FILE_MESSAGE: &str = "Unsupported file type. Please use .txt or .pdf files.";
pub const MISSING_FILE_MESSAGE: &str = "No file provided";
pub const EXTRACTION_FAILED_MESSAGE: &str =
    "Could not extract text from this file. Please try pasting the text directly.";
pub const ANALYSIS_FAILED_MESSAGE: &str = "Failed to analyze policy. Please try again.";
pub const HISTORY_FAILED_MESSAGE: &str = "Failed to access analysis history.";

/// The `Display` text is the client-facing message.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{}", TOO_SHORT_MESSAGE)]
    InputTooShort,
    #[error("{}", UNSUPPORTED_FILE_MESSAGE)]
    UnsupportedFile,
    #[error("{}", MISSING_FILE_MESSAGE)]
    MissingFile,
    #[error("{}", EXTRACTION_FAILED_MESSAGE)]
    ExtractionFailed,
    #[error("{0}")]
    BadRequest(String),
    #[error("{public}")]
    Internal { public: &'static str, detail: String },
}

impl ApiError {
    pub fn internal(public: &'static str, detail: impl Into<String>) -> Self {
        Self::Internal { public, detail: detail.into() }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InputTooShort
            | ApiError::UnsupportedFile
            | ApiError::MissingFile
            | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::ExtractionFailed => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal { detail, .. } = &self {
            tracing::error!(detail = %detail, "Request failed");
        }
        let status = self.status_code();
        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

impl From<PolicyScanError> for ApiError {
    fn from(e: PolicyScanError) -> Self {
        match e {
            PolicyScanError::InputTooShort { .. } => Self::InputTooShort,
            other => Self::internal(ANALYSIS_FAILED_MESSAGE, other.to_string()),
        }
    }
}

impl From<ExtractionError> for ApiError {
    fn from(e: ExtractionError) -> Self {
        match e {
            ExtractionError::UnsupportedExtension(_) => Self::UnsupportedFile,
            other => {
                tracing::warn!(error = %other, "Document extraction failed");
                Self::ExtractionFailed
            }
        }
    }
}

impl From<HistoryError> for ApiError {
    fn from(e: HistoryError) -> Self {
        Self::internal(HISTORY_FAILED_MESSAGE, e.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        Self::BadRequest(e.body_text())
    }
}

impl From<MultipartError> for ApiError {
    fn from(e: MultipartError) -> Self {
        Self::BadRequest(e.body_text())
    }
}
