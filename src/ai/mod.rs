//! Downstream generative-AI integration
//!
//! The relay only depends on [`ContentGenerator`], so the Gemini client can
//! be swapped for [`MockContentGenerator`] in tests.

pub mod gemini;
pub mod mock;

pub use gemini::{GeminiClient, GenerateContentRequest, GenerateContentResponse};
pub use mock::MockContentGenerator;

use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Perform one `generateContent` call. Non-success statuses are errors.
    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse>;
}
