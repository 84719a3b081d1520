mod analyze;
mod error;
mod extract;
mod health;
mod upload;

pub use analyze::{AnalyzeResponse, analyze_handler};
pub use error::{ApiError, ErrorResponse};
pub use extract::{ExtractResponse, extract_handler};
pub use health::{HealthResponse, health_handler};
