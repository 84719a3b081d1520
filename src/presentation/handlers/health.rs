use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{Classifier, TextExtractor};
use crate::presentation::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub classifier_available: bool,
}

/// The service itself is always up; classifier availability is reported so
/// callers can warn before submitting a document.
pub async fn health_handler<E, C>(State(state): State<AppState<E, C>>) -> impl IntoResponse
where
    E: TextExtractor + ?Sized + 'static,
    C: Classifier + ?Sized + 'static,
{
    let classifier_available = state.document_service.check_availability().await;

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            classifier_available,
        }),
    )
}
