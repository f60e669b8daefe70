/// Instruction sent when the caller does not supply a `prompt`.
pub const DEFAULT_INSTRUCTION: &str = "Analyze this ingredient label and return a structured summary including allergen warnings, nutritional highlights, and potential concerns.";

/// Returned as the result when Gemini's response carries no text parts.
pub const NO_CONTENT: &str = "No content returned.";

/// Top-level message of every downstream failure envelope.
pub const ANALYZE_FAILED: &str = "Failed to analyze image.";

/// Validation message for a missing or empty image payload.
pub const IMAGE_REQUIRED: &str = "imageBase64 is required in the request body.";

/// Pick the caller's instruction verbatim, or the default when none was given.
pub fn resolve_instruction(prompt: Option<&str>) -> &str {
    prompt.unwrap_or(DEFAULT_INSTRUCTION)
}
