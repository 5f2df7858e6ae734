use chrono::DateTime;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;

/// Signed access token handed back to a caller after login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    /// Compact JWT string
    pub access_token: String,

    /// Expiration time (Unix timestamp)
    pub expires_at: i64,
}

/// JWT token handler for issuing and verifying access tokens.
///
/// Uses HS256 (HMAC with SHA-256) with a symmetric secret fixed at construction.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create a new JWT handler with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Issue a token for `subject` that expires `expires_in_seconds` from now.
    ///
    /// # Errors
    /// * `InvalidLifetime` - Expiry instant overflows
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(
        &self,
        subject: impl ToString,
        expires_in_seconds: i64,
    ) -> Result<IssuedToken, JwtError> {
        self.issue_at(subject, expires_in_seconds, Utc::now())
    }

    /// Issue a token as if the current instant were `issued_at`.
    pub fn issue_at(
        &self,
        subject: impl ToString,
        expires_in_seconds: i64,
        issued_at: DateTime<Utc>,
    ) -> Result<IssuedToken, JwtError> {
        let claims = Claims::expiring_in(subject, issued_at, expires_in_seconds)?;
        let access_token = self.encode(&claims)?;

        Ok(IssuedToken {
            access_token,
            expires_at: claims.exp,
        })
    }

    /// Encode claims into a JWT token.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode(&self, claims: &Claims) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a JWT token against the current time.
    ///
    /// # Errors
    /// * `InvalidSignature` - Token was not signed with this handler's secret
    /// * `TokenExpired` - Current time is at or past `exp`
    /// * `DecodingFailed` - Token is malformed or lacks required claims
    pub fn decode(&self, token: &str) -> Result<Claims, JwtError> {
        self.decode_at(token, Utc::now().timestamp())
    }

    /// Decode and validate a JWT token against an explicit Unix timestamp.
    pub fn decode_at(&self, token: &str, now: i64) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is checked below with a strict boundary and no leeway
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                    _ => JwtError::DecodingFailed(e.to_string()),
                }
            })?;

        if token_data.claims.is_expired(now) {
            return Err(JwtError::TokenExpired);
        }

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    const SECRET: &[u8] = b"my_secret_key_at_least_32_bytes_long!";

    #[test]
    fn test_issue_and_decode() {
        let handler = JwtHandler::new(SECRET);

        let token = handler.issue("user123", 300).expect("Failed to issue token");
        assert!(!token.access_token.is_empty());

        let claims = handler
            .decode(&token.access_token)
            .expect("Failed to decode token");
        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.exp, token.expires_at);
    }

    #[test]
    fn test_zero_lifetime_expires_now() {
        let handler = JwtHandler::new(SECRET);

        let before = Utc::now().timestamp();
        let token = handler.issue("user123", 0).expect("Failed to issue token");
        let after = Utc::now().timestamp();

        assert!(token.expires_at >= before && token.expires_at <= after);
    }

    #[test]
    fn test_expiry_boundary() {
        let handler = JwtHandler::new(SECRET);
        let issued_at = Utc::now();

        let token = handler
            .issue_at("user123", 60, issued_at)
            .expect("Failed to issue token");
        let exp = token.expires_at;

        assert!(handler.decode_at(&token.access_token, exp - 1).is_ok());
        assert!(matches!(
            handler.decode_at(&token.access_token, exp),
            Err(JwtError::TokenExpired)
        ));
        assert!(matches!(
            handler.decode_at(&token.access_token, exp + 1),
            Err(JwtError::TokenExpired)
        ));
    }

    #[test]
    fn test_decode_expired_token() {
        let handler = JwtHandler::new(SECRET);

        let token = handler
            .issue_at("user123", 60, Utc::now() - Duration::seconds(120))
            .expect("Failed to issue token");

        let result = handler.decode(&token.access_token);
        assert!(matches!(result, Err(JwtError::TokenExpired)));
    }

    #[test]
    fn test_decode_invalid_token() {
        let handler = JwtHandler::new(SECRET);

        let result = handler.decode("invalid.token.here");
        assert!(matches!(result, Err(JwtError::DecodingFailed(_))));
    }

    #[test]
    fn test_decode_with_wrong_secret() {
        let handler1 = JwtHandler::new(b"secret1_at_least_32_bytes_long_key!");
        let handler2 = JwtHandler::new(b"secret2_at_least_32_bytes_long_key!");

        let token = handler1.issue("user123", 300).expect("Failed to issue token");

        let result = handler2.decode(&token.access_token);
        assert!(matches!(result, Err(JwtError::InvalidSignature)));
    }

    #[test]
    fn test_tampered_payload_is_rejected() {
        let handler = JwtHandler::new(SECRET);
        let token = handler.issue("user123", 300).expect("Failed to issue token");
        let other = handler.issue("admin", 300).expect("Failed to issue token");

        // Splice the second token's payload onto the first token's signature
        let parts: Vec<&str> = token.access_token.split('.').collect();
        let other_parts: Vec<&str> = other.access_token.split('.').collect();
        let forged = format!("{}.{}.{}", parts[0], other_parts[1], parts[2]);

        assert!(matches!(
            handler.decode(&forged),
            Err(JwtError::InvalidSignature)
        ));
    }
}
