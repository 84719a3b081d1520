pub mod classification;
pub mod observability;
pub mod rendering;
pub mod text_processing;
