use axum::extract::Multipart;

use crate::domain::{Document, DocumentFormat};

use super::error::ApiError;

/// Reads the first multipart field as a document. The format comes from the
/// filename extension, falling back to the part's content type.
pub async fn read_document(
    multipart: &mut Multipart,
    max_bytes: usize,
) -> Result<Document, ApiError> {
    let field = match multipart.next_field().await {
        Ok(Some(field)) => field,
        Ok(None) => {
            tracing::warn!("Request with no file");
            return Err(ApiError::BadRequest("No file uploaded".to_string()));
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart");
            return Err(ApiError::BadRequest(format!("Failed to read multipart: {e}")));
        }
    };

    let filename = field.file_name().unwrap_or("unknown").to_string();
    let mut format = DocumentFormat::from_filename(&filename);
    if !format.is_supported() {
        if let Some(mime) = field.content_type() {
            format = DocumentFormat::from_mime(mime);
        }
    }

    tracing::debug!(filename = %filename, format = %format, "Processing file upload");

    if !format.is_supported() {
        return Err(ApiError::UnsupportedFormat(filename));
    }

    let data = field.bytes().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to read file bytes");
        ApiError::BadRequest(format!("Failed to read file: {e}"))
    })?;

    if data.len() > max_bytes {
        return Err(ApiError::PayloadTooLarge {
            size_bytes: data.len(),
            limit_bytes: max_bytes,
        });
    }

    Ok(Document::new(filename, format, data))
}
