use thiserror::Error;

/// Application-wide error type, consolidating all possible errors into a single enum.
///
/// The classification and aggregation engine itself never fails; these variants
/// cover the layers around it (submission validation, configuration, question data).
#[derive(Debug, Clone, Error)]
pub enum AppError {
    /// Represents data validation errors (e.g., an empty question or an unknown difficulty tier).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., an unparsable environment variable).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("JSON error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}
