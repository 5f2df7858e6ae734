use std::fmt;

/// Authentication settings established once at startup.
///
/// Holds the token signing secret, the default token lifetime and the
/// password hashing cost. Values are read-only after construction; every
/// component that needs them receives a reference at build time.
#[derive(Clone)]
pub struct AuthSettings {
    secret: Vec<u8>,
    token_lifetime_seconds: i64,
    hash_cost: u32,
}

impl AuthSettings {
    /// Create authentication settings.
    ///
    /// # Arguments
    /// * `secret` - Symmetric key used to sign tokens
    /// * `token_lifetime_seconds` - Lifetime of issued tokens
    /// * `hash_cost` - Argon2 iteration count used for new password hashes
    pub fn new(secret: impl Into<Vec<u8>>, token_lifetime_seconds: i64, hash_cost: u32) -> Self {
        Self {
            secret: secret.into(),
            token_lifetime_seconds,
            hash_cost,
        }
    }

    pub fn secret(&self) -> &[u8] {
        &self.secret
    }

    pub fn token_lifetime_seconds(&self) -> i64 {
        self.token_lifetime_seconds
    }

    pub fn hash_cost(&self) -> u32 {
        self.hash_cost
    }
}

impl fmt::Debug for AuthSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSettings")
            .field("secret", &"[REDACTED]")
            .field("token_lifetime_seconds", &self.token_lifetime_seconds)
            .field("hash_cost", &self.hash_cost)
            .finish()
    }
}
