use tracing::{debug, warn};

use crate::errors::CoreError;
use crate::models::upload::UploadedFile;

/// MIME types browsers report for CSV files.
pub const ACCEPTED_MIME_TYPES: [&str; 2] = ["text/csv", "application/vnd.ms-excel"];

/// File name suffix accepted regardless of MIME type.
pub const CSV_EXTENSION: &str = ".csv";

/// Message shown to the user when a file is rejected.
pub const REJECTION_MESSAGE: &str = "Please upload a CSV file";

/// Gatekeeper for the upload widget.
///
/// Checks only the declared type and file name; the contents are never
/// opened, and an accepted file merely triggers a fresh mock series.
pub struct UploadService;

impl UploadService {
    pub fn new() -> Self {
        Self
    }

    /// Accept the file if its MIME type is a CSV type or its name ends in `.csv`.
    pub fn validate(&self, file: &UploadedFile) -> Result<(), CoreError> {
        let mime_ok = ACCEPTED_MIME_TYPES.contains(&file.mime_type.as_str());
        let name_ok = file.name.ends_with(CSV_EXTENSION);

        if mime_ok || name_ok {
            debug!(name = %file.name, mime = %file.mime_type, "upload accepted");
            Ok(())
        } else {
            warn!(name = %file.name, mime = %file.mime_type, "upload rejected: not a CSV file");
            Err(CoreError::InvalidUpload(REJECTION_MESSAGE.to_string()))
        }
    }
}

impl Default for UploadService {
    fn default() -> Self {
        Self::new()
    }
}
