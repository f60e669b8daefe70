use crate::{prompts, Error};
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Everything the analyze endpoint can answer with besides success.
#[derive(Debug)]
pub enum ApiError {
    /// The body could not be read as JSON.
    InvalidBody { status: StatusCode, message: String },
    /// The body was JSON but failed field validation.
    Validation(String),
    /// The downstream call failed.
    Downstream(Error),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        // Without a JSON content type the body is read as empty, so the
        // image is simply missing.
        if let JsonRejection::MissingJsonContentType(_) = rejection {
            return ApiError::Validation(prompts::IMAGE_REQUIRED.to_string());
        }

        let status = if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            StatusCode::PAYLOAD_TOO_LARGE
        } else {
            StatusCode::BAD_REQUEST
        };
        ApiError::InvalidBody {
            status,
            message: rejection.body_text(),
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError::Downstream(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidBody { status, message } => {
                (status, Json(json!({ "error": message }))).into_response()
            }
            ApiError::Validation(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            ApiError::Downstream(err) => {
                let status = err
                    .downstream_status()
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                (
                    status,
                    Json(json!({
                        "error": prompts::ANALYZE_FAILED,
                        "details": err.details(),
                    })),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn split(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validation_renders_400() {
        let (status, body) = split(ApiError::Validation(prompts::IMAGE_REQUIRED.to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": prompts::IMAGE_REQUIRED }));
    }

    #[tokio::test]
    async fn test_downstream_status_is_passed_through() {
        let err = Error::Provider {
            status: reqwest::StatusCode::TOO_MANY_REQUESTS,
            details: json!({ "error": { "message": "quota" } }),
        };

        let (status, body) = split(ApiError::from(err)).await;
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(body["error"], prompts::ANALYZE_FAILED);
        assert_eq!(body["details"]["error"]["message"], "quota");
    }

    #[tokio::test]
    async fn test_statusless_failure_is_500() {
        let err = Error::Config("unreachable".to_string());

        let (status, body) = split(ApiError::from(err)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], prompts::ANALYZE_FAILED);
        assert!(body["details"].is_string());
    }
}
