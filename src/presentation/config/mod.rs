mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    AnalysisSettings, ClassifierSettings, ExtractionSettings, LoggingSettings,
    SegmentationSettings, ServerSettings, Settings,
};
