use thiserror::Error;

/// Errors raised while turning a source file into an [`AdmissionDataset`].
///
/// All of them are fatal at startup: the dashboard has nothing to show
/// without its dataset.
///
/// [`AdmissionDataset`]: super::model::AdmissionDataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),

    #[error("missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<&'static str>),

    #[error("row {row}: score '{value}' is not a number")]
    InvalidScore { row: usize, value: String },

    #[error("row {row}: expected a JSON object")]
    NotAnObject { row: usize },

    #[error("expected a top-level JSON array of records")]
    NotAnArray,
}
