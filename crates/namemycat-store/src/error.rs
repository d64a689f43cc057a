//! Error types for namemycat storage.

/// Result type for storage operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Errors that can occur in storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Opening or closing the database connection failed.
    #[error("connection error: {0}")]
    Connection(String),

    /// A statement failed.
    #[error("database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}

/// Why a submitted name was not stored.
///
/// HTTP callers see both variants as the same failure; the split exists so
/// that logs can tell bad input apart from a broken database.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The submitted name was empty.
    #[error("name must not be empty")]
    EmptyName,

    /// The insert itself failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<namemycat_core::NameError> for SubmitError {
    fn from(err: namemycat_core::NameError) -> Self {
        match err {
            namemycat_core::NameError::EmptyName => Self::EmptyName,
        }
    }
}
