//! Error types for namemycat.

/// Result type for name validation.
pub type Result<T> = std::result::Result<T, NameError>;

/// Errors raised while validating a submitted name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    /// The submitted name has zero length.
    #[error("name must not be empty")]
    EmptyName,
}
