//! Gemini API client
//!
//! One single-turn `generateContent` call per request, with the
//! `google_search` tool enabled so answers can be grounded in live web
//! results. The response's grounding metadata is not contractually
//! guaranteed field-by-field, so parsing is tolerant: malformed citation
//! entries are skipped, never fatal.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::error::GenerationError;
use super::{Generate, GenerationResult, GroundingSource};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Substring Gemini embeds in its error body when the key is rejected.
const INVALID_KEY_MARKER: &str = "API key not valid";

/// Gemini API client for single-turn, search-grounded generation.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    tools: Vec<Tool>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct Tool {
    google_search: GoogleSearch,
}

#[derive(Serialize)]
struct GoogleSearch {}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<ResponseContent>,
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Deserialize)]
struct GroundingChunk {
    web: Option<WebSource>,
}

#[derive(Deserialize)]
struct WebSource {
    uri: Option<String>,
    title: Option<String>,
}

impl GeminiClient {
    /// Create a new Gemini client. The key is injected once at construction;
    /// callers resolve it from the environment at startup.
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model,
        }
    }
}

#[async_trait]
impl Generate for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<GenerationResult, GenerationError> {
        if self.api_key.is_empty() {
            return Err(GenerationError::MissingCredential);
        }

        let request = GenerateRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
            tools: vec![Tool {
                google_search: GoogleSearch {},
            }],
        };

        let url = format!("{}/models/{}:generateContent", API_BASE, self.model);
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| classify_error(&e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_error(&format!("{}: {}", status, body)));
        }

        let reply: GenerateResponse = response
            .json()
            .await
            .map_err(|_| GenerationError::Unrecognized)?;

        Ok(process_response(reply))
    }
}

/// Map a remote failure onto the error taxonomy.
///
/// A rejected key gets the fixed invalid-credential message no matter what
/// else the text contains; anything with detail is embedded verbatim.
fn classify_error(detail: &str) -> GenerationError {
    if detail.contains(INVALID_KEY_MARKER) {
        GenerationError::InvalidCredential
    } else if detail.trim().is_empty() {
        GenerationError::Unrecognized
    } else {
        GenerationError::Remote(detail.to_string())
    }
}

/// Flatten the service reply: answer text from the first candidate's parts,
/// sources from its grounding chunks.
///
/// Chunks without a usable URI are dropped. A missing or empty title falls
/// back to the URI so every kept source stays displayable.
fn process_response(reply: GenerateResponse) -> GenerationResult {
    let Some(candidate) = reply.candidates.into_iter().next() else {
        return GenerationResult::default();
    };

    let text = candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    let sources = candidate
        .grounding_metadata
        .map(|metadata| {
            metadata
                .grounding_chunks
                .into_iter()
                .filter_map(|chunk| {
                    let web = chunk.web?;
                    let uri = web.uri.filter(|u| !u.is_empty())?;
                    let title = web
                        .title
                        .filter(|t| !t.is_empty())
                        .unwrap_or_else(|| uri.clone());
                    Some(GroundingSource { uri, title })
                })
                .collect()
        })
        .unwrap_or_default();

    GenerationResult { text, sources }
}
