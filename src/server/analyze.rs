//! `POST /api/analyze`: relay one label photo to Gemini.

use super::{ApiError, AppState};
use crate::ai::GenerateContentRequest;
use crate::prompts;
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Serialize;
use serde_json::Value;

/// Validated inbound body.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeRequest {
    pub image_base64: String,
    pub prompt: Option<String>,
}

impl AnalyzeRequest {
    /// Validate a decoded JSON body. A body that is not an object counts as
    /// having no fields.
    pub fn from_json(body: Value) -> Result<Self, ApiError> {
        let mut fields = match body {
            Value::Object(map) => map,
            _ => Default::default(),
        };

        let image_base64 = match fields.remove("imageBase64") {
            Some(Value::String(image)) if !image.is_empty() => image,
            _ => return Err(ApiError::Validation(prompts::IMAGE_REQUIRED.to_string())),
        };

        let prompt = match fields.remove("prompt") {
            None | Some(Value::Null) => None,
            Some(Value::String(prompt)) => Some(prompt),
            Some(_) => {
                return Err(ApiError::Validation(
                    "prompt must be a string when provided.".to_string(),
                ))
            }
        };

        Ok(Self {
            image_base64,
            prompt,
        })
    }

    /// Outbound envelope, using the default instruction when no prompt was sent.
    pub fn into_envelope(self) -> GenerateContentRequest {
        let instruction = prompts::resolve_instruction(self.prompt.as_deref()).to_string();
        GenerateContentRequest::for_image(instruction, self.image_base64)
    }
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub result: String,
}

pub async fn analyze(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let Json(body) = body.map_err(|rejection| {
        tracing::debug!("Rejected analyze body: {}", rejection.body_text());
        ApiError::from(rejection)
    })?;

    let request = AnalyzeRequest::from_json(body).inspect_err(|e| {
        tracing::debug!("Invalid analyze request: {:?}", e);
    })?;

    let envelope = request.into_envelope();
    let response = state
        .generator
        .generate_content(&envelope)
        .await
        .map_err(|e| {
            tracing::error!("Gemini API error: {}", e.details());
            ApiError::from(e)
        })?;

    Ok(Json(AnalyzeResponse {
        result: response.text_or_fallback(),
    }))
}
