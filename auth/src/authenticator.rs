use crate::jwt::Claims;
use crate::jwt::IssuedToken;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::settings::AuthSettings;

/// Authentication coordinator combining password verification and token issuance.
///
/// Built once from [`AuthSettings`] and shared read-only afterwards.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    token_lifetime_seconds: i64,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Errors
    /// * `InvalidCost` - Configured hashing cost is not accepted by Argon2
    pub fn new(settings: &AuthSettings) -> Result<Self, PasswordError> {
        Ok(Self {
            password_hasher: PasswordHasher::with_cost(settings.hash_cost())?,
            jwt_handler: JwtHandler::new(settings.secret()),
            token_lifetime_seconds: settings.token_lifetime_seconds(),
        })
    }

    /// Hash a password for storage.
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue an access token for `subject`.
    ///
    /// The token is only produced when the password matches.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash could not be parsed
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: impl ToString,
    ) -> Result<IssuedToken, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash)? {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self
            .jwt_handler
            .issue(subject, self.token_lifetime_seconds)?)
    }

    /// Validate and decode an access token.
    ///
    /// # Errors
    /// * `JwtError` - Signature mismatch, expiry, or malformed token
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.jwt_handler.decode(token)
    }
}
