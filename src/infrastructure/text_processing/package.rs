use std::io::{Cursor, Read};

use zip::ZipArchive;
use zip::result::ZipError;

#[derive(Debug, thiserror::Error)]
pub enum PackageError {
    #[error("not a zip package: {0}")]
    InvalidArchive(String),
    #[error("package entry not found: {0}")]
    MissingEntry(String),
    #[error("failed to read package entry {name}: {reason}")]
    UnreadableEntry { name: String, reason: String },
}

/// Reads a UTF-8 entry (e.g. `word/document.xml`, `content.xml`) out of a zip-based
/// office package.
pub fn read_entry(data: &[u8], name: &str) -> Result<String, PackageError> {
    let mut archive = ZipArchive::new(Cursor::new(data))
        .map_err(|e| PackageError::InvalidArchive(e.to_string()))?;

    let mut entry = archive.by_name(name).map_err(|e| match e {
        ZipError::FileNotFound => PackageError::MissingEntry(name.to_string()),
        other => PackageError::UnreadableEntry {
            name: name.to_string(),
            reason: other.to_string(),
        },
    })?;

    let mut content = String::new();
    entry
        .read_to_string(&mut content)
        .map_err(|e| PackageError::UnreadableEntry {
            name: name.to_string(),
            reason: e.to_string(),
        })?;

    Ok(content)
}
