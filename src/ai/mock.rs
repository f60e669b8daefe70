use super::{ContentGenerator, GenerateContentRequest, GenerateContentResponse};
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
enum MockReply {
    Body(serde_json::Value),
    Failure {
        status: StatusCode,
        details: serde_json::Value,
    },
}

pub struct MockContentGenerator {
    replies: Arc<Mutex<Vec<MockReply>>>,
    requests: Arc<Mutex<Vec<GenerateContentRequest>>>,
}

impl MockContentGenerator {
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a raw Gemini response body.
    pub fn with_response(self, body: serde_json::Value) -> Self {
        self.replies.lock().unwrap().push(MockReply::Body(body));
        self
    }

    /// Queue a single-candidate response whose parts are `texts`.
    pub fn with_text_parts(self, texts: &[&str]) -> Self {
        let parts: Vec<_> = texts
            .iter()
            .map(|t| serde_json::json!({ "text": t }))
            .collect();
        self.with_response(serde_json::json!({
            "candidates": [{ "content": { "parts": parts } }]
        }))
    }

    /// Queue a downstream failure with the given status and body.
    pub fn with_failure(self, status: StatusCode, details: serde_json::Value) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push(MockReply::Failure { status, details });
        self
    }

    pub fn get_call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Envelopes received so far, oldest first.
    pub fn requests(&self) -> Vec<GenerateContentRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for MockContentGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentGenerator for MockContentGenerator {
    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let count = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(request.clone());
            requests.len()
        };

        let replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            return Ok(serde_json::from_value(serde_json::json!({
                "candidates": [{ "content": { "parts": [{ "text": "Mock analysis" }] } }]
            }))
            .unwrap_or_default());
        }

        match replies[(count - 1) % replies.len()].clone() {
            MockReply::Body(body) => Ok(serde_json::from_value(body).unwrap_or_default()),
            MockReply::Failure { status, details } => Err(Error::Provider { status, details }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> GenerateContentRequest {
        GenerateContentRequest::for_image("x".to_string(), "eQ==".to_string())
    }

    #[tokio::test]
    async fn test_mock_default_response() {
        let mock = MockContentGenerator::new();
        let response = mock.generate_content(&request()).await.unwrap();
        assert_eq!(response.text_or_fallback(), "Mock analysis");
    }

    #[tokio::test]
    async fn test_mock_cycles_replies_and_records_requests() {
        let mock = MockContentGenerator::new()
            .with_text_parts(&["first"])
            .with_failure(StatusCode::BAD_GATEWAY, serde_json::json!("boom"));

        assert_eq!(
            mock.generate_content(&request()).await.unwrap().text_or_fallback(),
            "first"
        );
        let err = mock.generate_content(&request()).await.unwrap_err();
        assert_eq!(err.downstream_status(), Some(StatusCode::BAD_GATEWAY));
        assert_eq!(
            mock.generate_content(&request()).await.unwrap().text_or_fallback(),
            "first"
        );

        assert_eq!(mock.get_call_count(), 3);
        assert_eq!(mock.requests()[0].instruction(), Some("x"));
    }
}
