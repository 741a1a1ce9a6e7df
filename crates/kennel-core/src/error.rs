use thiserror::Error;

/// Result type for record store operations.
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;

#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("record id already exists: {0}")]
    Conflict(String),
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage query failed: {0}")]
    Query(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
}

/// A single violated validation rule, addressed by field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// All rules violated by a payload, accumulated across every field.
///
/// Never constructed empty: at least one [`FieldError`] is always present.
#[derive(Debug, Clone, Error)]
#[error("{}", format_field_errors(.0))]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    /// Returns the accumulated field errors.
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }
}

fn format_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Clone, Error)]
pub enum RegistryError {
    #[error("invalid payload: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
