//! Request normalization and validation.

use crate::error::InvalidRequest;

/// Variant counts a request may ask for.
pub const ALLOWED_VARIANT_COUNTS: [u8; 4] = [5, 10, 15, 20];

/// A language or tone selection: one of the conventional presets, or free
/// text entered by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    Preset(String),
    Custom(String),
}

impl Choice {
    fn resolved(&self) -> &str {
        match self {
            Choice::Preset(value) | Choice::Custom(value) => value.trim(),
        }
    }
}

/// A raw generation request as assembled by the caller.
#[derive(Debug, Clone)]
pub struct NameRequest {
    pub description: String,
    pub language: Choice,
    pub tone: Choice,
    pub variant_count: u8,
    pub explain_meanings: bool,
}

impl NameRequest {
    /// Normalize and validate, producing the request the pipeline runs on.
    ///
    /// Out-of-set variant counts are rejected, never coerced.
    pub fn validate(self) -> Result<GenerationRequest, InvalidRequest> {
        let description = self.description.trim().to_string();
        if description.is_empty() {
            return Err(InvalidRequest::EmptyDescription);
        }

        if !ALLOWED_VARIANT_COUNTS.contains(&self.variant_count) {
            return Err(InvalidRequest::UnsupportedVariantCount(self.variant_count));
        }

        let language = self.language.resolved().to_string();
        if matches!(self.language, Choice::Custom(_)) && language.is_empty() {
            return Err(InvalidRequest::EmptyCustomLanguage);
        }

        let tone = self.tone.resolved().to_string();
        if matches!(self.tone, Choice::Custom(_)) && tone.is_empty() {
            return Err(InvalidRequest::EmptyCustomTone);
        }

        Ok(GenerationRequest {
            description,
            language,
            tone,
            variant_count: self.variant_count,
            explain_meanings: self.explain_meanings,
        })
    }
}

/// A validated, normalized request. Only constructed through
/// [`NameRequest::validate`].
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    description: String,
    language: String,
    tone: String,
    variant_count: u8,
    explain_meanings: bool,
}

impl GenerationRequest {
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn tone(&self) -> &str {
        &self.tone
    }

    pub fn variant_count(&self) -> usize {
        usize::from(self.variant_count)
    }

    pub fn explain_meanings(&self) -> bool {
        self.explain_meanings
    }
}
