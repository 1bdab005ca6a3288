//! Source document handles and the Word acceptance rule.

use crate::error::ConvertError;
use std::path::{Path, PathBuf};

/// A candidate or accepted source document.
///
/// Only metadata is kept; the document bytes are never read because no real
/// conversion takes place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    path: Option<PathBuf>,
    name: String,
    size_bytes: u64,
    mime: Option<String>,
}

impl SourceDocument {
    /// Creates a handle from already known metadata (e.g. a drag-and-drop payload).
    pub fn new(name: impl Into<String>, size_bytes: u64, mime: Option<String>) -> Self {
        Self {
            path: None,
            name: name.into(),
            size_bytes,
            mime: mime.filter(|m| !m.is_empty()),
        }
    }

    fn with_path(mut self, path: PathBuf) -> Self {
        self.path = Some(path);
        self
    }

    /// Builds a handle for a file on disk, reading its size and guessing its MIME type.
    pub fn from_path(path: &Path) -> Result<Self, ConvertError> {
        let metadata = std::fs::metadata(path).map_err(|e| ConvertError::io(path, e))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mime = mime_guess::from_path(path).first_raw().map(str::to_string);

        Ok(Self::new(name, metadata.len(), mime).with_path(path.to_path_buf()))
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// Declared MIME type, if the origin provided one.
    pub fn mime(&self) -> Option<&str> {
        self.mime.as_deref()
    }

    /// True if this handle passes the Word document filter.
    pub fn is_word_document(&self) -> bool {
        is_word_document(&self.name, self.mime.as_deref())
    }

    /// Default output base name: the file name without its trailing extension.
    pub fn default_base_name(&self) -> String {
        derive_base_name(&self.name)
    }
}

/// Word filter: a declared type containing "word", or a `.doc`/`.docx` name suffix.
pub fn is_word_document(name: &str, mime: Option<&str>) -> bool {
    mime.is_some_and(|m| m.contains("word")) || name.ends_with(".docx") || name.ends_with(".doc")
}

/// Strips one trailing extension from a file name.
///
/// The extension is the text after the last dot; it must be non-empty and
/// must not contain a path separator. Names without such a suffix are
/// returned unchanged.
pub fn derive_base_name(name: &str) -> String {
    match name.rfind('.') {
        Some(idx) => {
            let ext = &name[idx + 1..];
            if ext.is_empty() || ext.contains('/') {
                name.to_string()
            } else {
                name[..idx].to_string()
            }
        }
        None => name.to_string(),
    }
}
