//! The document a user picked for translation

use std::path::Path;

/// A user's chosen document: name, raw bytes and the MIME type the picker
/// reported, if any. Never mutated after creation; a new selection replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    name: String,
    mime_type: Option<String>,
    content: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            mime_type: None,
            content: content.into(),
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Read a file from disk, keeping only its final path component as name
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let content = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document.txt".to_string());
        Ok(Self::new(name, content))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Size in bytes
    pub fn size(&self) -> usize {
        self.content.len()
    }

    /// Size as shown next to the file name, e.g. `"1.50 KB"`
    pub fn size_label(&self) -> String {
        format!("{:.2} KB", self.size() as f64 / 1024.0)
    }

    /// Lower-cased extension including the dot, e.g. `".docx"`
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.name.rsplit_once('.')?;
        if stem.is_empty() && !self.name[1..].contains('.') {
            // ".txt" on its own is a hidden file, not an extension
            return None;
        }
        Some(format!(".{}", ext.to_ascii_lowercase()))
    }

    /// Filename offered for the translated download
    pub fn translated_name(&self) -> String {
        format!("translated_{}", self.name)
    }
}
