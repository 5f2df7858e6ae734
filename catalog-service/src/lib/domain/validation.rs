use thiserror::Error;

/// Field-level validation failures for users and products.
///
/// Raised while building domain values, before anything reaches a repository.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("id is required")]
    MissingId,

    #[error("invalid id")]
    InvalidId,

    #[error("name is required")]
    MissingName,

    #[error("price is required")]
    MissingPrice,

    #[error("invalid price")]
    InvalidPrice,

    #[error("email is required")]
    MissingEmail,

    #[error("invalid email address")]
    InvalidEmail,

    #[error("password is required")]
    MissingPassword,
}

impl ValidationError {
    /// Whether the failure concerns the record identifier rather than its contents.
    pub fn is_identifier(&self) -> bool {
        matches!(self, ValidationError::MissingId | ValidationError::InvalidId)
    }
}
