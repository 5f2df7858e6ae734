use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::ProductData;
use crate::domain::product::pagination::PageRequest;
use crate::inbound::http::router::AppState;

pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ListProductsParams>,
) -> Result<ApiSuccess<Vec<ProductData>>, ApiError> {
    let products = state
        .product_service
        .list_products(params.into_page_request())
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        products.iter().map(ProductData::from).collect(),
    ))
}

/// Raw query string; values are strings so bad numbers never reject the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListProductsParams {
    page: Option<String>,
    limit: Option<String>,
    sort: Option<String>,
}

impl ListProductsParams {
    fn into_page_request(self) -> PageRequest {
        PageRequest::new(
            parse_or_zero(self.page.as_deref()),
            parse_or_zero(self.limit.as_deref()),
            self.sort.as_deref().unwrap_or_default(),
        )
    }
}

fn parse_or_zero(value: Option<&str>) -> u32 {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::pagination::SortDirection;

    fn params(page: Option<&str>, limit: Option<&str>, sort: Option<&str>) -> ListProductsParams {
        ListProductsParams {
            page: page.map(str::to_string),
            limit: limit.map(str::to_string),
            sort: sort.map(str::to_string),
        }
    }

    #[test]
    fn test_numeric_params() {
        let request = params(Some("2"), Some("10"), Some("desc")).into_page_request();
        assert_eq!(request, PageRequest::new(2, 10, "desc"));
        assert_eq!(request.sort, SortDirection::Desc);
    }

    #[test]
    fn test_bad_numbers_become_zero() {
        let request = params(Some("two"), Some("-5"), None).into_page_request();
        assert_eq!(request.page, 0);
        assert_eq!(request.limit, 0);
        assert_eq!(request.sort, SortDirection::Asc);
        assert!(request.window().is_none());

        let request = ListProductsParams::default().into_page_request();
        assert!(request.window().is_none());
    }
}
