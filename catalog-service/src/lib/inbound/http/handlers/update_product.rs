use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::create_product::ProductRequest;
use super::ApiError;
use super::ApiSuccess;
use super::ProductData;
use crate::domain::product::models::UpdateProductCommand;
use crate::inbound::http::extractors::ApiJson;
use crate::inbound::http::router::AppState;

/// Full replacement of name and price; the creation time is kept.
pub async fn update_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    ApiJson(body): ApiJson<ProductRequest>,
) -> Result<ApiSuccess<ProductData>, ApiError> {
    let command = UpdateProductCommand::new(&product_id, body.name(), body.price())?;

    state
        .product_service
        .update_product(command)
        .await
        .map_err(ApiError::from)
        .map(|ref product| ApiSuccess::new(StatusCode::OK, product.into()))
}
