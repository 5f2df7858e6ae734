use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::extractors::ApiJson;
use crate::inbound::http::router::AppState;

/// Exchange email and password for a bearer token.
///
/// Unknown email and wrong password produce the same 401 response.
pub async fn generate_token(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<GenerateTokenRequest>,
) -> Result<ApiSuccess<TokenData>, ApiError> {
    let token = state
        .user_service
        .authenticate(
            body.email.as_deref().unwrap_or_default(),
            body.password.as_deref().unwrap_or_default(),
        )
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        TokenData {
            access_token: token.access_token,
            expires_at: token.expires_at,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GenerateTokenRequest {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenData {
    pub access_token: String,
    /// Unix seconds
    pub expires_at: i64,
}
