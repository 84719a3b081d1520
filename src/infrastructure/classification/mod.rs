mod http_classification_client;

pub use http_classification_client::{DEFAULT_BASE_URL, HttpClassificationClient};
