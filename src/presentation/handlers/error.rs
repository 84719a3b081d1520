use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::ExtractionError;
use crate::application::services::PipelineError;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    PayloadTooLarge { size_bytes: usize, limit_bytes: usize },
    UnsupportedFormat(String),
    Extraction(ExtractionError),
    ClassifierUnavailable,
}

impl From<ExtractionError> for ApiError {
    fn from(e: ExtractionError) -> Self {
        match e {
            ExtractionError::UnsupportedFormat(format) => Self::UnsupportedFormat(format),
            other => Self::Extraction(other),
        }
    }
}

impl From<PipelineError> for ApiError {
    fn from(e: PipelineError) -> Self {
        match e {
            PipelineError::Unavailable(_) => Self::ClassifierUnavailable,
            PipelineError::Extraction(e) => e.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            Self::PayloadTooLarge {
                size_bytes,
                limit_bytes,
            } => (
                StatusCode::PAYLOAD_TOO_LARGE,
                format!("File is {size_bytes} bytes, limit is {limit_bytes} bytes"),
            ),
            Self::UnsupportedFormat(format) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                format!("Unsupported document format: {format}. Upload a PDF, DOC, DOCX or ODT file"),
            ),
            Self::Extraction(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("Cannot analyze this document: {e}"),
            ),
            Self::ClassifierUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Classification service is unavailable".to_string(),
            ),
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}
