use serde::Serialize;

/// Display metadata for one selectable detection method.
///
/// Purely descriptive: selecting a model changes what the UI shows,
/// never how scores are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelDescriptor {
    /// Stable identifier, unique within the catalog (1..=3)
    pub id: u32,

    /// Short display name (e.g., "Autoencoder")
    pub name: &'static str,

    /// One-line description for the selection list
    pub description: &'static str,
}

impl std::fmt::Display for ModelDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
