//! Gemini `generateContent` payload types.
//!
//! Request types mirror the provider contract exactly. Response types treat
//! every level as optional, since Gemini omits fields freely (safety blocks,
//! empty candidates, parts without text).

use crate::prompts;
use serde::{Deserialize, Serialize};

/// Media type attached to every uploaded image.
pub const IMAGE_MIME_TYPE: &str = "image/png";

/// Top-level `generateContent` request envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

/// One conversation turn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

/// Untagged union of text and inline media content parts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

/// Base64 inline payload used for the image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

impl GenerateContentRequest {
    /// A single user turn: the instruction text followed by the image.
    pub fn for_image(instruction: String, image_base64: String) -> Self {
        Self {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![
                    Part::Text { text: instruction },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: IMAGE_MIME_TYPE.to_string(),
                            data: image_base64,
                        },
                    },
                ],
            }],
        }
    }

    /// Text of the first text part, if any.
    pub fn instruction(&self) -> Option<&str> {
        self.contents
            .iter()
            .flat_map(|c| c.parts.iter())
            .find_map(|p| match p {
                Part::Text { text } => Some(text.as_str()),
                Part::InlineData { .. } => None,
            })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    pub candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CandidateContent {
    pub parts: Option<Vec<ResponsePart>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Text parts of the first candidate joined by newlines.
    ///
    /// Returns `None` when any level of `candidates[0].content.parts` is
    /// missing. A part without text contributes an empty line.
    pub fn joined_text(&self) -> Option<String> {
        let parts = self
            .candidates
            .as_ref()?
            .first()?
            .content
            .as_ref()?
            .parts
            .as_ref()?;

        Some(
            parts
                .iter()
                .map(|p| p.text.as_deref().unwrap_or_default())
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }

    pub fn text_or_fallback(&self) -> String {
        self.joined_text()
            .unwrap_or_else(|| prompts::NO_CONTENT.to_string())
    }
}
