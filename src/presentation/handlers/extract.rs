use axum::Json;
use axum::extract::{Multipart, State};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::{Classifier, TextExtractor};
use crate::domain::DocumentFormat;
use crate::presentation::state::AppState;

use super::error::ApiError;
use super::upload::read_document;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractResponse {
    pub document_id: String,
    pub format: DocumentFormat,
    pub text: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn extract_handler<E, C>(
    State(state): State<AppState<E, C>>,
    mut multipart: Multipart,
) -> Result<Response, ApiError>
where
    E: TextExtractor + ?Sized + 'static,
    C: Classifier + ?Sized + 'static,
{
    let document = read_document(&mut multipart, state.max_upload_bytes).await?;

    let extracted = state.document_service.extract(&document).await.map_err(|e| {
        tracing::warn!(error = %e, filename = %document.filename, "Extraction failed");
        ApiError::from(e)
    })?;

    Ok(Json(ExtractResponse {
        document_id: document.id.to_string(),
        format: document.format,
        text: extracted.text,
    })
    .into_response())
}
