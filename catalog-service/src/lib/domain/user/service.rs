use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::IssuedToken;

use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::CredentialFailure;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hashing and token issuance
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    async fn hash_password(&self, password: String) -> Result<String, UserError> {
        // Argon2 is CPU-bound; keep it off the async workers
        let authenticator = Arc::clone(&self.authenticator);
        let password_hash =
            tokio::task::spawn_blocking(move || authenticator.hash_password(&password))
                .await
                .map_err(|e| UserError::Unknown(format!("Password hashing task failed: {}", e)))??;

        Ok(password_hash)
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        // Not atomic with the insert below; the store's unique constraint is the final guard
        if self
            .repository
            .find_by_email(command.email.as_str())
            .await?
            .is_some()
        {
            return Err(UserError::EmailAlreadyExists(command.email.to_string()));
        }

        let password_hash = self.hash_password(command.password).await?;

        let user = User {
            id: UserId::new(),
            name: command.name,
            email: command.email,
            password_hash,
        };

        let created_user = self.repository.create(user).await?;
        tracing::info!(user_id = %created_user.id, "User registered");

        Ok(created_user)
    }

    async fn get_user_by_email(&self, email: &str) -> Result<User, UserError> {
        self.repository
            .find_by_email(email)
            .await?
            .ok_or(UserError::NotFound(email.to_string()))
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<IssuedToken, UserError> {
        let Some(user) = self.repository.find_by_email(email).await? else {
            tracing::warn!(
                reason = CredentialFailure::UnknownEmail.as_str(),
                "Login rejected"
            );
            return Err(UserError::InvalidCredentials(
                CredentialFailure::UnknownEmail,
            ));
        };

        let authenticator = Arc::clone(&self.authenticator);
        let password = password.to_string();
        let user_id = user.id;
        let result = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(&password, &user.password_hash, user.id)
        })
        .await
        .map_err(|e| UserError::Unknown(format!("Authentication task failed: {}", e)))?;

        match result {
            Ok(token) => {
                tracing::info!(user_id = %user_id, expires_at = token.expires_at, "Token issued");
                Ok(token)
            }
            Err(AuthenticationError::InvalidCredentials) => {
                tracing::warn!(
                    user_id = %user_id,
                    reason = CredentialFailure::PasswordMismatch.as_str(),
                    "Login rejected"
                );
                Err(UserError::InvalidCredentials(
                    CredentialFailure::PasswordMismatch,
                ))
            }
            Err(AuthenticationError::PasswordError(e)) => {
                tracing::warn!(
                    user_id = %user_id,
                    reason = CredentialFailure::MalformedHash.as_str(),
                    error = %e,
                    "Login rejected"
                );
                Err(UserError::InvalidCredentials(
                    CredentialFailure::MalformedHash,
                ))
            }
            Err(AuthenticationError::JwtError(e)) => Err(UserError::Token(e)),
        }
    }
}
