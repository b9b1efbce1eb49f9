//! Gemini `generateContent` backend.

use std::time::Duration;

use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use serde::{Deserialize, Serialize};

use crate::completion::{CompletionError, Result, TextCompletion};
use async_trait::async_trait;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_MAX_RETRIES: u32 = 3;

/// How much of an error body is worth keeping in the error message.
const ERROR_BODY_LIMIT: usize = 200;

/// Gemini API client.
///
/// Transient failures (5xx, timeouts, connection errors) are retried with
/// exponential backoff inside the middleware stack; callers only ever see
/// the final outcome.
pub struct GeminiClient {
    client: ClientWithMiddleware,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    /// Create a client with the default retry policy.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_max_retries(api_key, DEFAULT_MAX_RETRIES)
    }

    /// Create a client with an explicit retry limit (0 disables retries).
    pub fn with_max_retries(api_key: impl Into<String>, max_retries: u32) -> Self {
        let retry_policy = ExponentialBackoff::builder()
            .retry_bounds(Duration::from_millis(100), Duration::from_secs(5))
            .build_with_max_retries(max_retries);

        let client = ClientBuilder::new(Client::new())
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Self {
            client,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Set a custom base URL (e.g., for proxies or alternative endpoints).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[async_trait]
impl TextCompletion for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let body = GenerateContentRequest::from_prompt(prompt);

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::Unavailable(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(CompletionError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            if mentions_quota(&text) {
                return Err(CompletionError::RateLimited);
            }
            let snippet: String = text.chars().take(ERROR_BODY_LIMIT).collect();
            return Err(CompletionError::Unavailable(format!(
                "HTTP {}: {}",
                status, snippet
            )));
        }

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::Unavailable(format!("malformed response: {e}")))?;

        if payload
            .candidates
            .iter()
            .any(|c| c.finish_reason.as_deref() == Some("SAFETY"))
        {
            log::warn!("Gemini withheld the response behind its safety filter");
            return Err(CompletionError::Filtered);
        }

        let text = payload.joined_text();

        // The API occasionally reports quota exhaustion as ordinary text.
        if mentions_quota(&text) {
            return Err(CompletionError::RateLimited);
        }

        log::debug!("Gemini returned {} chars of text", text.len());
        Ok(text)
    }
}

fn mentions_quota(text: &str) -> bool {
    let lowered = text.to_lowercase();
    lowered.contains("rate limit") || lowered.contains("quota")
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<ContentPayload>,
    generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![ContentPayload {
                parts: vec![PartPayload {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig::default(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ContentPayload {
    parts: Vec<PartPayload>,
}

#[derive(Debug, Serialize)]
struct PartPayload {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_p: f32,
    top_k: u32,
    max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.9,
            top_p: 0.95,
            top_k: 40,
            max_output_tokens: 512,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<ResponseCandidate>,
}

impl GenerateContentResponse {
    fn joined_text(&self) -> String {
        let mut blocks = Vec::new();
        for candidate in &self.candidates {
            if let Some(content) = &candidate.content {
                for part in &content.parts {
                    if let Some(text) = &part.text {
                        blocks.push(text.as_str());
                    }
                }
            }
        }
        blocks.join("\n")
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseCandidate {
    content: Option<ResponseContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}
