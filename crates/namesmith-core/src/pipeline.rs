//! Pipeline orchestration: one request in, one full-count result out.

use serde::Serialize;

use namesmith_llm::{CompletionError, TextCompletion};

use crate::error::InvalidRequest;
use crate::extract::{self, Extraction};
use crate::fallback;
use crate::prompt;
use crate::request::{GenerationRequest, NameRequest};
use crate::sanitize;

/// A single generated name, with its explanation when one was requested
/// and the remote generator supplied it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NameCandidate {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// Which generator produced the result.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Remote,
    Fallback,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationResult {
    pub ideas: Vec<NameCandidate>,
    pub source: Source,
}

/// The name-generation pipeline.
///
/// Performs at most one remote attempt and one fallback attempt per
/// request; retry and backoff belong to the completion backend. With no
/// backend configured the remote attempt is skipped entirely.
pub struct NamePipeline<C> {
    remote: Option<C>,
}

impl<C: TextCompletion> NamePipeline<C> {
    pub fn new(remote: Option<C>) -> Self {
        Self { remote }
    }

    /// Run one request through the pipeline.
    ///
    /// Every remote-side failure (rate limit, content filter, transport
    /// failure, empty or unusable text) is absorbed by the fallback
    /// generator, so a validated request always yields a full-count result.
    pub async fn generate(
        &self,
        request: NameRequest,
    ) -> Result<GenerationResult, InvalidRequest> {
        let request = request.validate()?;

        if let Some(result) = self.try_remote(&request).await {
            return Ok(result);
        }

        let ideas = fallback::generate_fallback(request.description(), request.variant_count())
            .into_iter()
            .map(|text| NameCandidate {
                text,
                explanation: None,
            })
            .collect();
        Ok(GenerationResult {
            ideas,
            source: Source::Fallback,
        })
    }

    async fn try_remote(&self, request: &GenerationRequest) -> Option<GenerationResult> {
        let remote = match &self.remote {
            Some(remote) => remote,
            None => {
                log::info!("no completion backend configured, using the procedural generator");
                return None;
            }
        };

        let prompt_text = prompt::build_prompt(request);
        let text = match remote.complete(&prompt_text).await {
            Ok(text) => text,
            Err(CompletionError::RateLimited) => {
                log::warn!("completion backend rate limited, falling back");
                return None;
            }
            Err(CompletionError::Filtered) => {
                log::warn!("completion response was content filtered, falling back");
                return None;
            }
            Err(CompletionError::Unavailable(reason)) => {
                log::warn!("completion backend unavailable ({reason}), falling back");
                return None;
            }
        };

        if text.trim().is_empty() {
            log::warn!("completion backend returned empty text, falling back");
            return None;
        }

        let extraction = extract::extract(&text, request.variant_count());
        let ideas = pair_candidates(extraction, request.explain_meanings());
        if ideas.is_empty() {
            // Non-empty text with nothing recoverable counts as a remote
            // failure too.
            log::warn!("no usable names in the remote response, falling back");
            return None;
        }

        Some(GenerationResult {
            ideas,
            source: Source::Remote,
        })
    }
}

/// Apply the shape policy and attach index-aligned explanations to the
/// survivors.
fn pair_candidates(extraction: Extraction, keep_explanations: bool) -> Vec<NameCandidate> {
    let Extraction {
        ideas,
        explanations,
    } = extraction;

    ideas
        .into_iter()
        .enumerate()
        .filter_map(|(index, idea)| {
            if !sanitize::is_name_shaped(&idea) {
                log::debug!("dropping candidate that fails the shape policy: {idea:?}");
                return None;
            }
            let explanation = if keep_explanations {
                explanations
                    .get(index)
                    .map(|text| text.trim())
                    .filter(|text| !text.is_empty())
                    .map(str::to_string)
            } else {
                None
            };
            Some(NameCandidate {
                text: idea.trim().to_string(),
                explanation,
            })
        })
        .collect()
}
