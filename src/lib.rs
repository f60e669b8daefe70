//! Proxy for the Smart Ingredient Scanner app.
//!
//! Accepts a base64-encoded photo of an ingredient label, forwards it to
//! Gemini together with an analysis instruction, and hands the generated
//! text back to the caller.

pub mod ai;
pub mod config;
pub mod error;
pub mod prompts;
pub mod server;

pub use error::{Error, Result};
