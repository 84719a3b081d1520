use bytes::Bytes;
use serde::Serialize;

use super::document_id::DocumentId;

/// A loaded document: raw bytes plus the declared format tag.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub filename: String,
    pub format: DocumentFormat,
    pub data: Bytes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Odt,
    Unsupported,
}

impl DocumentFormat {
    pub fn from_extension(extension: &str) -> Self {
        match extension.to_ascii_lowercase().as_str() {
            "pdf" => Self::Pdf,
            "doc" | "docx" => Self::Docx,
            "odt" => Self::Odt,
            _ => Self::Unsupported,
        }
    }

    pub fn from_filename(filename: &str) -> Self {
        match filename.rsplit_once('.') {
            Some((_, extension)) => Self::from_extension(extension),
            None => Self::Unsupported,
        }
    }

    pub fn from_mime(mime: &str) -> Self {
        match mime {
            "application/pdf" => Self::Pdf,
            "application/msword"
            | "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                Self::Docx
            }
            "application/vnd.oasis.opendocument.text" => Self::Odt,
            _ => Self::Unsupported,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Odt => "odt",
            Self::Unsupported => "unsupported",
        }
    }

    pub fn is_supported(&self) -> bool {
        *self != Self::Unsupported
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Document {
    pub fn new(filename: String, format: DocumentFormat, data: impl Into<Bytes>) -> Self {
        Self {
            id: DocumentId::new(),
            filename,
            format,
            data: data.into(),
        }
    }

    /// Builds a document whose format is inferred from the filename extension.
    pub fn from_upload(filename: String, data: impl Into<Bytes>) -> Self {
        let format = DocumentFormat::from_filename(&filename);
        Self::new(filename, format, data)
    }

    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}
