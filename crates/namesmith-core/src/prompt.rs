//! Prompt construction for the remote generator.
//!
//! The prompt carries every output constraint the extractor and sanitizer
//! rely on, stated as explicit rules, and closes with two independent
//! self-check directives. Those directives measurably cut down on malformed
//! output, so they stay even though the extractor tolerates violations.

use crate::request::GenerationRequest;

/// Word-count bound per name, stated in the prompt.
pub const MIN_NAME_WORDS: usize = 2;
pub const MAX_NAME_WORDS: usize = 4;

/// Character bound per name after trimming, stated in the prompt. The
/// fallback generator enforces the same bound by construction.
pub const MIN_NAME_CHARS: usize = 8;
pub const MAX_NAME_CHARS: usize = 25;

/// Render a validated request into the instruction text sent to the model.
pub fn build_prompt(request: &GenerationRequest) -> String {
    let count = request.variant_count();
    let mut lines = vec![
        "You are a naming expert. Generate brandable channel name ideas only.".to_string(),
        format!("Channel description: \"{}\"", request.description()),
        format!("Target language: {}", request.language()),
        format!("Tone/style: {}", request.tone()),
        "Rules:".to_string(),
        format!("- Generate exactly {count} names."),
        format!(
            "- Write every name in {} using its native script.",
            request.language()
        ),
        format!("- {MIN_NAME_WORDS} to {MAX_NAME_WORDS} words per name."),
        format!("- {MIN_NAME_CHARS} to {MAX_NAME_CHARS} characters per name after trimming."),
        "- Title Case only. Never write a name in all capitals.".to_string(),
        "- Use only letters and single spaces. No digits, punctuation, emoji, hyphens, or underscores.".to_string(),
        "- Avoid overused suffix words such as Hub, Zone, Official, or TV. At most one name in the set may end with one.".to_string(),
        "- Every name must be clearly distinct from the others in sound and wording.".to_string(),
        "- Do not use existing trademarks or the names of real people.".to_string(),
    ];

    if request.explain_meanings() {
        lines.push(
            "- Provide a concise explanation of at most 20 words for each name.".to_string(),
        );
    } else {
        lines.push("- Do NOT include explanations.".to_string());
    }

    lines.push(
        "Output format (STRICT): return ONLY a JSON object with these fields:".to_string(),
    );
    if request.explain_meanings() {
        lines.push(
            "{\n  \"ideas\": [string, ...],\n  \"explanations\": [string, ...]\n}".to_string(),
        );
        lines.push(format!(
            "Both arrays must hold exactly {count} entries, index-aligned."
        ));
    } else {
        lines.push("{\n  \"ideas\": [string, ...]\n}".to_string());
        lines.push(format!("The \"ideas\" array must hold exactly {count} strings."));
    }
    lines.push("No extra text, no markdown, no comments.".to_string());
    lines.push(
        "Before responding, verify that every name satisfies every rule above.".to_string(),
    );
    lines.push(format!(
        "Before responding, count the entries and confirm there are exactly {count} names."
    ));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{Choice, NameRequest};

    fn validated(explain: bool) -> GenerationRequest {
        NameRequest {
            description: "Beginner woodworking projects".to_string(),
            language: Choice::Preset("Spanish".to_string()),
            tone: Choice::Preset("Playful".to_string()),
            variant_count: 15,
            explain_meanings: explain,
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn prompt_contains_count_language_and_tone() {
        let prompt = build_prompt(&validated(false));
        assert!(prompt.contains("exactly 15 names"));
        assert!(prompt.contains("Spanish"));
        assert!(prompt.contains("Playful"));
        assert!(prompt.contains("Beginner woodworking projects"));
    }

    #[test]
    fn prompt_states_structural_directives() {
        let prompt = build_prompt(&validated(false));
        assert!(prompt.contains("ONLY a JSON object"));
        assert!(prompt.contains("\"ideas\""));
        assert!(prompt.contains("only letters and single spaces"));
        assert!(prompt.contains("Do NOT include explanations"));
    }

    #[test]
    fn prompt_requests_explanations_when_asked() {
        let prompt = build_prompt(&validated(true));
        assert!(prompt.contains("\"explanations\""));
        assert!(prompt.contains("at most 20 words"));
        assert!(!prompt.contains("Do NOT include explanations"));
    }

    #[test]
    fn prompt_ends_with_self_check_directives() {
        let prompt = build_prompt(&validated(false));
        assert!(prompt.contains("Before responding, verify"));
        assert!(prompt.contains("Before responding, count"));
    }
}
