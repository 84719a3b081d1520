mod composite_extractor;
mod docx_adapter;
mod extractor_factory;
mod markup;
mod odt_adapter;
pub(crate) mod package;
mod pdf_adapter;
mod punctuation_segmenter;

pub use composite_extractor::CompositeExtractor;
pub use docx_adapter::{DocxAdapter, docx_to_html};
pub use extractor_factory::ExtractorFactory;
pub use markup::strip_markup;
pub use odt_adapter::OdtAdapter;
pub use pdf_adapter::{DEFAULT_EXTRACTION_TIMEOUT, PdfAdapter};
pub use punctuation_segmenter::{OffsetStrategy, PunctuationSegmenter};
