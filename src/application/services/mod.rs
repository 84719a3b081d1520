mod analysis_service;
mod document_service;

pub use analysis_service::AnalysisService;
pub use document_service::{DocumentReport, DocumentService, PipelineError};
