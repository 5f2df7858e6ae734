//! Authentication utilities library
//!
//! Provides the credential and token primitives used by the catalog service:
//! - Password hashing (Argon2id, configurable cost)
//! - HS256 access token issuance and validation
//! - Authentication coordination (verify, then issue)
//!
//! All configuration is supplied through an explicitly constructed
//! [`AuthSettings`] value; nothing is read from the environment here.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::with_cost(1).unwrap();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! assert!(!hasher.verify("other_password", &hash).unwrap());
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::JwtHandler;
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let token = handler.issue("user123", 900).unwrap();
//! let claims = handler.decode(&token.access_token).unwrap();
//! assert_eq!(claims.sub, "user123");
//! assert_eq!(claims.exp, token.expires_at);
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{AuthSettings, Authenticator};
//!
//! let settings = AuthSettings::new("secret_key_at_least_32_bytes_long!", 3600, 1);
//! let auth = Authenticator::new(&settings).unwrap();
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue token
//! let result = auth.authenticate("password123", &hash, "user123").unwrap();
//!
//! // Validate token
//! let claims = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(claims.sub, "user123");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;
pub mod settings;

pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::IssuedToken;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use settings::AuthSettings;
