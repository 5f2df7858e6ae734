use async_trait::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::extract::Request;
use axum::Json;
use serde::de::DeserializeOwned;

use crate::inbound::http::handlers::ApiError;

/// JSON body extractor whose rejections use the API error envelope.
///
/// Decoder details are logged, not returned to the caller.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ApiError::from)?;

        Ok(ApiJson(value))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Request body rejected");

        match rejection {
            JsonRejection::JsonDataError(_) => {
                ApiError::UnprocessableEntity("request body has invalid field types".to_string())
            }
            JsonRejection::JsonSyntaxError(_) => {
                ApiError::BadRequest("request body is not valid JSON".to_string())
            }
            JsonRejection::MissingJsonContentType(_) => {
                ApiError::BadRequest("expected Content-Type: application/json".to_string())
            }
            _ => ApiError::BadRequest("request body could not be read".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http;
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::Router;
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;

    #[derive(Deserialize)]
    struct Payload {
        #[serde(default)]
        price: Option<f64>,
    }

    async fn echo(ApiJson(payload): ApiJson<Payload>) -> String {
        payload.price.unwrap_or_default().to_string()
    }

    async fn send(body: &'static str, content_type: Option<&str>) -> (StatusCode, Value) {
        let mut request = http::Request::builder().method("POST").uri("/");
        if let Some(content_type) = content_type {
            request = request.header(http::header::CONTENT_TYPE, content_type);
        }

        let response = Router::new()
            .route("/", post(echo))
            .oneshot(request.body(Body::from(body)).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn test_null_decodes_as_absent() {
        let (status, _) = send(r#"{"price": null}"#, Some("application/json")).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_wrong_type_uses_envelope() {
        let (status, body) = send(r#"{"price": "abc"}"#, Some("application/json")).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["status_code"], 422);
        assert_eq!(
            body["data"]["message"],
            "request body has invalid field types"
        );
    }

    #[tokio::test]
    async fn test_truncated_json_uses_envelope() {
        let (status, body) = send(r#"{"price": 1"#, Some("application/json")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status_code"], 400);
        assert_eq!(body["data"]["message"], "request body is not valid JSON");
    }

    #[tokio::test]
    async fn test_missing_content_type_uses_envelope() {
        let (status, body) = send(r#"{"price": 1}"#, None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status_code"], 400);
    }
}
