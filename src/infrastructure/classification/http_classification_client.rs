use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{Classifier, ServiceError};
use crate::domain::{ClassificationVerdict, VerdictLabel};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Client for the sentence classification service (`GET /health`, `POST /classify`).
pub struct HttpClassificationClient {
    client: Client,
    base_url: String,
}

#[derive(Serialize)]
struct ClassifyRequest<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct ClassifyResponse {
    class: f64,
    confidence: f64,
}

#[derive(Deserialize)]
struct HealthResponse {
    status: String,
}

impl HttpClassificationClient {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, Self::DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("reqwest client build never fails with valid TLS config");
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Classifier for HttpClassificationClient {
    async fn check_health(&self) -> bool {
        let url = format!("{}/health", self.base_url);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Classifier health check failed");
                return false;
            }
        };

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "Classifier health check returned error status");
            return false;
        }

        match response.json::<HealthResponse>().await {
            Ok(health) if health.status == "ok" => true,
            Ok(health) => {
                tracing::warn!(status = %health.status, "Classifier reports not ready");
                false
            }
            Err(e) => {
                tracing::warn!(error = %e, "Classifier health response could not be decoded");
                false
            }
        }
    }

    async fn classify(&self, text: &str) -> Result<ClassificationVerdict, ServiceError> {
        let url = format!("{}/classify", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&ClassifyRequest { text })
            .send()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(status = %status, body = %body, "Classifier returned error status");
            return Err(ServiceError::BadStatus(status.as_u16()));
        }

        let verdict: ClassifyResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::InvalidResponse(e.to_string()))?;

        Ok(ClassificationVerdict::new(
            VerdictLabel::from_class(verdict.class),
            verdict.confidence,
        ))
    }
}
