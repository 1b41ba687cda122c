//! AI generation module: the prompt adapter for Gemini
//!
//! This module owns everything between a built prompt string and a
//! rendered answer:
//! - Prompt templates for the three writing tasks
//! - A Gemini `generateContent` client with Google Search grounding enabled
//! - Normalization of the loosely-typed grounding metadata into a stable
//!   `GenerationResult`

mod actor;
mod client;
mod error;
pub mod prompts;

pub use actor::{AiActorHandle, AiCommand, AiEvent, spawn_ai_actor};
pub use client::GeminiClient;
pub use error::GenerationError;

use async_trait::async_trait;

/// A web source the model cited for a grounded answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroundingSource {
    pub uri: String,
    /// Display label; never empty - falls back to the URI when the service
    /// supplies no title.
    pub title: String,
}

/// The normalized outcome of one generation call.
///
/// Immutable once produced; a new call replaces it wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationResult {
    pub text: String,
    /// Cited sources in the order the service returned them.
    pub sources: Vec<GroundingSource>,
}

/// The generation backend. Implemented by [`GeminiClient`] and by scripted
/// mocks in tests.
#[async_trait]
pub trait Generate: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<GenerationResult, GenerationError>;
}
