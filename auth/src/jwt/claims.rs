use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// Access token claims.
///
/// A token carries the subject it was issued for and the absolute instant
/// (Unix seconds) at which it stops being accepted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (entity identifier)
    pub sub: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl Claims {
    /// Build claims for a subject that expire a fixed number of seconds after `issued_at`.
    ///
    /// # Errors
    /// * `InvalidLifetime` - Expiry instant overflows a Unix timestamp
    pub fn expiring_in(
        subject: impl ToString,
        issued_at: DateTime<Utc>,
        expires_in_seconds: i64,
    ) -> Result<Self, JwtError> {
        let iat = issued_at.timestamp();
        let exp = iat
            .checked_add(expires_in_seconds)
            .ok_or(JwtError::InvalidLifetime(expires_in_seconds))?;

        Ok(Self {
            sub: subject.to_string(),
            exp,
            iat,
        })
    }

    /// Check if the token is expired at the given instant.
    ///
    /// A token is valid strictly before `exp` and expired from `exp` onwards.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }
}
