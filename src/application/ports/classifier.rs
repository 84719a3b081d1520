use async_trait::async_trait;

use crate::domain::ClassificationVerdict;

#[async_trait]
pub trait Classifier: Send + Sync {
    /// Liveness probe. Never fails: any problem reaching the service reads as `false`.
    async fn check_health(&self) -> bool;

    async fn classify(&self, text: &str) -> Result<ClassificationVerdict, ServiceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("classification service unavailable")]
    Unavailable,
    #[error("classification service returned HTTP {0}")]
    BadStatus(u16),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
