use async_trait::async_trait;
use auth::IssuedToken;

use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// Rejects an email that is already registered, hashes the password,
    /// then persists the account.
    ///
    /// # Arguments
    /// * `command` - Validated command containing name, email, and password
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `Password` - Password hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError>;

    /// Retrieve user by email address.
    ///
    /// # Errors
    /// * `NotFound` - No user with this email
    /// * `DatabaseError` - Database operation failed
    async fn get_user_by_email(&self, email: &str) -> Result<User, UserError>;

    /// Exchange email and password for a signed access token.
    ///
    /// Runs lookup, password verification and token issuance in that order;
    /// a failure at any step stops the flow without issuing a token.
    ///
    /// # Returns
    /// Access token with its expiry instant
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password (indistinguishable to callers)
    /// * `Token` - Token generation failed
    /// * `DatabaseError` - Database operation failed
    async fn authenticate(&self, email: &str, password: &str) -> Result<IssuedToken, UserError>;
}

/// Persistence operations for user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Store rejected a duplicate email
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by identifier.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve user by email address.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;
}
