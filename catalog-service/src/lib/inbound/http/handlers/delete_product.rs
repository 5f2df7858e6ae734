use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use crate::domain::product::models::ProductId;
use crate::inbound::http::router::AppState;

pub async fn delete_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let product_id = ProductId::from_string(&product_id)?;

    state.product_service.delete_product(&product_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
