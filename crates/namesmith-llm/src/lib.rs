//! Text-completion backends for the name-generation pipeline.
//!
//! The pipeline only needs one capability from a remote model: prompt in,
//! raw text out. [`TextCompletion`] captures that seam; [`GeminiClient`] is
//! the HTTP implementation against the Gemini `generateContent` endpoint.
//! Retry and backoff for transient failures live entirely inside this crate.

pub mod completion;
pub mod gemini;

pub use completion::{CompletionError, Result, TextCompletion};
pub use gemini::GeminiClient;
