use std::time::Duration;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::infrastructure::classification::DEFAULT_BASE_URL;
use crate::infrastructure::text_processing::OffsetStrategy;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub classifier: ClassifierSettings,
    pub analysis: AnalysisSettings,
    pub segmentation: SegmentationSettings,
    pub extraction: ExtractionSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierSettings {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisSettings {
    pub max_concurrency: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SegmentationSettings {
    pub offset_strategy: OffsetStrategy,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionSettings {
    pub max_file_size_mb: usize,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub json_format: bool,
}

impl ClassifierSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl ExtractionSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn max_file_size_bytes(&self) -> usize {
        self.max_file_size_mb * 1024 * 1024
    }
}

impl Settings {
    /// Layers built-in defaults, the optional `appsettings.{env}` file and
    /// `APP__`-prefixed environment variables (e.g. `APP__CLASSIFIER__BASE_URL`).
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000i64)?
            .set_default("classifier.base_url", DEFAULT_BASE_URL)?
            .set_default("classifier.timeout_secs", 30i64)?
            .set_default("analysis.max_concurrency", 1i64)?
            .set_default("segmentation.offset_strategy", "first_occurrence")?
            .set_default("extraction.max_file_size_mb", 20i64)?
            .set_default("extraction.timeout_secs", 30i64)?
            .set_default("logging.json_format", false)?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
