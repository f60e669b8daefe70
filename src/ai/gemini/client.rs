use super::types::{GenerateContentRequest, GenerateContentResponse};
use crate::ai::ContentGenerator;
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const MODEL: &str = "gemini-2.5-flash";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Gemini REST client for the `generateContent` operation.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self::new_with_client(api_key, Client::new())
    }

    pub fn new_with_client(api_key: String, client: Client) -> Self {
        Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Point the client at another host, e.g. a local mock server.
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, MODEL)
    }
}

// The request URL carries the API key, so it is stripped from transport errors.
fn transport_error(e: reqwest::Error) -> Error {
    Error::Http(e.without_url())
}

#[async_trait]
impl ContentGenerator for GeminiClient {
    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        tracing::debug!("Sending generateContent request to Gemini");

        let response = self
            .client
            .post(self.endpoint())
            .timeout(self.timeout)
            .query(&[("key", &self.api_key)])
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            tracing::debug!("Gemini returned status {}", status);
            let details = serde_json::from_str(&body)
                .unwrap_or_else(|_| serde_json::Value::String(body));
            return Err(Error::Provider { status, details });
        }

        Ok(serde_json::from_str(&body).unwrap_or_else(|e| {
            tracing::warn!("Unexpected Gemini response shape: {}", e);
            GenerateContentResponse::default()
        }))
    }
}
