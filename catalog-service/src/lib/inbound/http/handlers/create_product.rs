use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::ProductData;
use crate::domain::product::models::CreateProductCommand;
use crate::inbound::http::extractors::ApiJson;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_product(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    ApiJson(body): ApiJson<ProductRequest>,
) -> Result<ApiSuccess<ProductData>, ApiError> {
    let command = CreateProductCommand::new(body.name(), body.price())?;
    tracing::debug!(user_id = %caller.user_id, "Creating product");

    state
        .product_service
        .create_product(command)
        .await
        .map_err(ApiError::from)
        .map(|ref product| ApiSuccess::new(StatusCode::CREATED, product.into()))
}

/// Body shared by create and replace.
///
/// An omitted or null price decodes as zero and is reported as missing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

impl ProductRequest {
    pub fn name(&self) -> String {
        self.name.clone().unwrap_or_default()
    }

    pub fn price(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }
}
