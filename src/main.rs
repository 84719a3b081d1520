use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use docscreen::application::ports::SentenceSegmenter;
use docscreen::application::services::{AnalysisService, DocumentService};
use docscreen::infrastructure::classification::HttpClassificationClient;
use docscreen::infrastructure::observability::{TracingConfig, init_tracing};
use docscreen::infrastructure::text_processing::{ExtractorFactory, PunctuationSegmenter};
use docscreen::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment)?;

    init_tracing(&TracingConfig::new(
        environment.as_str(),
        settings.logging.json_format,
    ));

    let classifier = Arc::new(HttpClassificationClient::with_timeout(
        &settings.classifier.base_url,
        settings.classifier.timeout(),
    ));
    let segmenter: Arc<dyn SentenceSegmenter> = Arc::new(PunctuationSegmenter::new(
        settings.segmentation.offset_strategy,
    ));
    let extractor = Arc::new(ExtractorFactory::create_default(
        settings.extraction.timeout(),
    ));

    let analysis_service = Arc::new(
        AnalysisService::new(Arc::clone(&classifier), segmenter)
            .with_max_concurrency(settings.analysis.max_concurrency),
    );
    let document_service = Arc::new(DocumentService::new(extractor, analysis_service));

    if document_service.check_availability().await {
        tracing::info!(base_url = %classifier.base_url(), "Classification service is ready");
    } else {
        tracing::warn!(
            base_url = %classifier.base_url(),
            "Classification service is unavailable; analysis requests will be rejected until it recovers"
        );
    }

    let state = AppState {
        document_service,
        max_upload_bytes: settings.extraction.max_file_size_bytes(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
