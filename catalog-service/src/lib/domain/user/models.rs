use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

use crate::domain::validation::ValidationError;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[a-z0-9._%+\-]+@[a-z0-9.\-]+\.[a-z]{2,}$").expect("email pattern compiles")
});

/// User aggregate entity.
///
/// Represents a registered account. The password hash never leaves the
/// domain and repositories; HTTP responses are built from the other fields.
#[derive(Clone)]
pub struct User {
    pub id: UserId,
    pub name: UserName,
    pub email: EmailAddress,
    pub password_hash: String,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password_hash", &"[REDACTED]")
            .finish()
    }
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Errors
    /// * `MissingId` - String is empty
    /// * `InvalidId` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::MissingId);
        }

        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|_| ValidationError::InvalidId)
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Display name of a user; never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName(String);

impl UserName {
    /// # Errors
    /// * `MissingName` - Name is empty or only whitespace
    pub fn new(name: String) -> Result<Self, ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Email address type
///
/// Accepts `local@domain.tld` shaped addresses in any letter case and stores
/// them lowercased; the login key of an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `MissingEmail` - Email is empty
    /// * `InvalidEmail` - Email does not match the address pattern
    pub fn new(email: String) -> Result<Self, ValidationError> {
        if email.is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        if !EMAIL_REGEX.is_match(&email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(Self(email.to_lowercase()))
    }

    /// Lookup key for a raw, unvalidated address.
    pub fn normalize(email: &str) -> String {
        email.to_lowercase()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to register a new user with validated fields.
pub struct CreateUserCommand {
    pub name: UserName,
    pub email: EmailAddress,
    pub password: String,
}

impl CreateUserCommand {
    /// Validate raw registration input.
    ///
    /// Checks run in a fixed order so the first failing field is always the
    /// one reported: name, email presence, email shape, password.
    ///
    /// # Arguments
    /// * `name` - Display name
    /// * `email` - Email address (login key)
    /// * `password` - Plain text password (will be hashed by service)
    pub fn new(name: String, email: String, password: String) -> Result<Self, ValidationError> {
        let name = UserName::new(name)?;
        let email = EmailAddress::new(email)?;
        if password.is_empty() {
            return Err(ValidationError::MissingPassword);
        }

        Ok(Self {
            name,
            email,
            password,
        })
    }
}

impl fmt::Debug for CreateUserCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateUserCommand")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
