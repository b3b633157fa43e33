use serde::{Deserialize, Serialize};

/// Metadata of a file handed over by the upload widget.
///
/// Only the name, reported MIME type and size are known here; file
/// contents never reach the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    /// File name as reported by the browser (e.g., "prices.csv")
    pub name: String,

    /// MIME type as reported by the browser; may be empty
    pub mime_type: String,

    /// Size in bytes
    pub size_bytes: u64,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size_bytes,
        }
    }

    /// Human-readable size in kilobytes with one decimal (e.g., "12.5 KB").
    #[must_use]
    pub fn display_size(&self) -> String {
        format!("{:.1} KB", self.size_bytes as f64 / 1024.0)
    }
}
