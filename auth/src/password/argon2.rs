use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;

use super::errors::PasswordError;

/// Password hashing implementation.
///
/// Hashes with Argon2id and a random per-password salt. The iteration count
/// is fixed at construction; verification reads the parameters back out of
/// the stored PHC string, so hashes produced under an older cost still verify.
#[derive(Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    /// Create a password hasher with a fixed iteration count.
    ///
    /// # Arguments
    /// * `iterations` - Argon2 time cost (must be at least 1)
    ///
    /// # Errors
    /// * `InvalidCost` - Argon2 rejected the parameters
    pub fn with_cost(iterations: u32) -> Result<Self, PasswordError> {
        let params = Params::new(
            Params::DEFAULT_M_COST,
            iterations,
            Params::DEFAULT_P_COST,
            None,
        )
        .map_err(|e| PasswordError::InvalidCost(e.to_string()))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hash a plaintext password.
    ///
    /// # Returns
    /// PHC string format hash (includes algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// Digest comparison is constant time.
    ///
    /// # Returns
    /// True if password matches, false otherwise
    ///
    /// # Errors
    /// * `VerificationFailed` - Stored hash is malformed or uses unsupported parameters
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed_hash = PasswordHash::new(hash).map_err(|e| {
            PasswordError::VerificationFailed(format!("Invalid password hash: {}", e))
        })?;

        match self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
        {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(PasswordError::VerificationFailed(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::with_cost(1).expect("Failed to build hasher");
        let password = "my_secure_password";

        let hash = hasher.hash(password).expect("Failed to hash password");

        assert!(hasher
            .verify(password, &hash)
            .expect("Failed to verify password"));
        assert!(!hasher
            .verify("wrong_password", &hash)
            .expect("Failed to verify password"));
    }

    #[test]
    fn test_hash_is_salted() {
        let hasher = PasswordHasher::with_cost(1).expect("Failed to build hasher");

        let first = hasher.hash("same").expect("Failed to hash password");
        let second = hasher.hash("same").expect("Failed to hash password");

        assert_ne!(first, second);
        assert!(first.starts_with("$argon2id$"));
    }

    #[test]
    fn test_cost_is_embedded_in_hash() {
        let hasher = PasswordHasher::with_cost(3).expect("Failed to build hasher");
        let hash = hasher.hash("password").expect("Failed to hash password");

        assert!(hash.contains("t=3"));

        // A hasher with a different cost still verifies it.
        let other = PasswordHasher::with_cost(1).expect("Failed to build hasher");
        assert!(other.verify("password", &hash).unwrap());
    }

    #[test]
    fn test_zero_cost_is_rejected() {
        let result = PasswordHasher::with_cost(0);
        assert!(matches!(result, Err(PasswordError::InvalidCost(_))));
    }

    #[test]
    fn test_verify_invalid_hash() {
        let hasher = PasswordHasher::with_cost(1).expect("Failed to build hasher");
        let result = hasher.verify("password", "invalid_hash");
        assert!(matches!(result, Err(PasswordError::VerificationFailed(_))));
    }

    #[test]
    fn test_empty_password_round_trip() {
        let hasher = PasswordHasher::with_cost(1).expect("Failed to build hasher");
        let hash = hasher.hash("").expect("Failed to hash password");

        assert!(hasher.verify("", &hash).unwrap());
        assert!(!hasher.verify(" ", &hash).unwrap());
    }
}
