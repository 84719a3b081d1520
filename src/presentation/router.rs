use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{Classifier, TextExtractor};
use crate::presentation::handlers::{analyze_handler, extract_handler, health_handler};
use crate::presentation::state::AppState;

/// Room for multipart boundaries and part headers on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn create_router<E, C>(state: AppState<E, C>) -> Router
where
    E: TextExtractor + ?Sized + 'static,
    C: Classifier + ?Sized + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let body_limit = state.max_upload_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health_handler::<E, C>))
        .route("/api/v1/extract", post(extract_handler::<E, C>))
        .route("/api/v1/analyze", post(analyze_handler::<E, C>))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
