use thiserror::Error;

/// Unified error type for the anomaly-demo-core library.
///
/// Series generation and score assignment are total and never fail;
/// only the session-level operations (uploads, model selection,
/// configuration) return `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Upload ──────────────────────────────────────────────────────
    #[error("Invalid upload: {0}")]
    InvalidUpload(String),

    #[error("No data uploaded: upload a CSV file before analyzing")]
    NoUpload,

    // ── Model catalog ───────────────────────────────────────────────
    #[error("Unknown detection model: {0}")]
    UnknownModel(u32),

    // ── Configuration ───────────────────────────────────────────────
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
