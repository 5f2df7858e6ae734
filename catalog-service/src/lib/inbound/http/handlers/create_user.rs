use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::domain::user::models::CreateUserCommand;
use crate::inbound::http::extractors::ApiJson;
use crate::inbound::http::router::AppState;

pub async fn create_user(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateUserRequest>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    state
        .user_service
        .create_user(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::CREATED, user.into()))
}

/// HTTP request body for creating a user (raw JSON)
///
/// Omitted or null fields decode as empty strings and are reported by validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    password: Option<String>,
}

impl CreateUserRequest {
    fn try_into_command(self) -> Result<CreateUserCommand, ApiError> {
        CreateUserCommand::new(
            self.name.unwrap_or_default(),
            self.email.unwrap_or_default(),
            self.password.unwrap_or_default(),
        ).map_err(ApiError::from)
    }
}
