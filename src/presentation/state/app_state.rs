use std::sync::Arc;

use crate::application::ports::{Classifier, TextExtractor};
use crate::application::services::DocumentService;

pub struct AppState<E: ?Sized, C: ?Sized>
where
    E: TextExtractor,
    C: Classifier,
{
    pub document_service: Arc<DocumentService<E, C>>,
    pub max_upload_bytes: usize,
}

impl<E: ?Sized, C: ?Sized> Clone for AppState<E, C>
where
    E: TextExtractor,
    C: Classifier,
{
    fn clone(&self) -> Self {
        Self {
            document_service: Arc::clone(&self.document_service),
            max_upload_bytes: self.max_upload_bytes,
        }
    }
}
