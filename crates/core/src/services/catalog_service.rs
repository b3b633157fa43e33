use crate::errors::CoreError;
use crate::models::model::ModelDescriptor;

/// The detection methods offered in the model picker.
pub static MODEL_CATALOG: [ModelDescriptor; 3] = [
    ModelDescriptor {
        id: 1,
        name: "Autoencoder",
        description: "Deep learning model that compares reconstruction error to detect anomalies",
    },
    ModelDescriptor {
        id: 2,
        name: "LSTM",
        description: "Long Short-Term Memory network for sequential anomaly detection",
    },
    ModelDescriptor {
        id: 3,
        name: "Isolation Forest",
        description: "Ensemble method that isolates anomalies instead of profiling normal points",
    },
];

/// Read-only lookups over [`MODEL_CATALOG`].
pub struct ModelCatalog;

impl ModelCatalog {
    /// All models, ordered by id.
    pub fn all() -> &'static [ModelDescriptor] {
        &MODEL_CATALOG
    }

    pub fn find(id: u32) -> Option<&'static ModelDescriptor> {
        MODEL_CATALOG.iter().find(|m| m.id == id)
    }

    /// Like [`ModelCatalog::find`], but an unknown id is an error.
    pub fn get(id: u32) -> Result<&'static ModelDescriptor, CoreError> {
        Self::find(id).ok_or(CoreError::UnknownModel(id))
    }
}
