use thiserror::Error;

use crate::domain::validation::ValidationError;

/// Why a login attempt was rejected.
///
/// Only visible to logging; callers see a single `InvalidCredentials` message
/// whatever the reason, so account existence cannot be probed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialFailure {
    UnknownEmail,
    PasswordMismatch,
    MalformedHash,
}

impl CredentialFailure {
    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialFailure::UnknownEmail => "unknown_email",
            CredentialFailure::PasswordMismatch => "password_mismatch",
            CredentialFailure::MalformedHash => "malformed_hash",
        }
    }
}

/// Top-level error for all user-related operations
#[derive(Debug, Clone, Error)]
pub enum UserError {
    #[error("Invalid user: {0}")]
    Validation(#[from] ValidationError),

    // Domain-level errors
    #[error("User not found: {0}")]
    NotFound(String),

    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    #[error("Invalid credentials")]
    InvalidCredentials(CredentialFailure),

    // Infrastructure errors
    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] auth::JwtError),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
