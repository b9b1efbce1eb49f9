//! Best-effort recovery of candidates from raw model text.
//!
//! Remote generators do not reliably honor "JSON only": output arrives as
//! bare JSON, JSON wrapped in prose or markdown fences, or a plain bulleted
//! list. Extraction is an ordered list of parse strategies, first success
//! wins, and never fails: the worst case is an empty extraction, which the
//! pipeline treats like a remote failure.

use serde_json::Value;

/// Candidates recovered from one raw response.
///
/// `explanations` is index-aligned with `ideas` when present; the
/// line-splitting strategy never produces explanations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub ideas: Vec<String>,
    pub explanations: Vec<String>,
}

/// Extract candidate names from `raw`.
///
/// `limit` caps the line-splitting strategy only; a parsed JSON object is
/// returned as-is, whatever its length.
pub fn extract(raw: &str, limit: usize) -> Extraction {
    if raw.trim().is_empty() {
        return Extraction::default();
    }
    if let Some(extraction) = extract_json_object(raw) {
        return extraction;
    }
    extract_lines(raw, limit)
}

/// Strategy 1: the first `{` to the last `}` parses as an object carrying
/// an `ideas` (or legacy `names`) array.
fn extract_json_object(raw: &str) -> Option<Extraction> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end <= start {
        return None;
    }

    let value: Value = serde_json::from_str(&raw[start..=end]).ok()?;
    let object = value.as_object()?;

    let ideas = string_array(object.get("ideas").or_else(|| object.get("names")));
    let explanations = string_array(object.get("explanations"));
    Some(Extraction { ideas, explanations })
}

fn string_array(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Strategy 2: treat each non-blank line as one candidate, shedding list
/// markup and label lines.
fn extract_lines(raw: &str, limit: usize) -> Extraction {
    let mut ideas = Vec::new();
    for line in raw.lines() {
        if ideas.len() == limit {
            break;
        }
        if let Some(candidate) = clean_line(line) {
            ideas.push(candidate);
        }
    }
    Extraction {
        ideas,
        explanations: Vec::new(),
    }
}

fn clean_line(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with("```") {
        return None;
    }

    let unbulleted = trimmed.trim_start_matches(|c: char| {
        matches!(c, '-' | '•' | '*' | '"' | '\'' | '`') || c.is_whitespace()
    });
    let unnumbered = strip_list_numbering(unbulleted)
        .trim_start_matches(|c: char| matches!(c, '"' | '\'' | '`') || c.is_whitespace());

    let mut rest = unnumbered;
    for label in ["Name:", "Channel:"] {
        if let Some(stripped) = rest.strip_prefix(label) {
            rest = stripped.trim_start();
        }
    }
    let rest = rest
        .trim_end_matches(|c: char| matches!(c, '"' | '\'' | ',' | '`') || c.is_whitespace());

    if rest.is_empty() || rest.ends_with(':') || looks_like_label(rest) {
        return None;
    }
    // Anything shorter than a real name or longer than a sentence fragment
    // is markup or prose, not a candidate.
    if rest.len() <= 2 || rest.len() >= 50 {
        return None;
    }
    Some(rest.to_string())
}

/// Strip `1.` / `12)` style list numbering.
fn strip_list_numbering(line: &str) -> &str {
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return line;
    }
    let rest = &line[digits..];
    rest.strip_prefix('.')
        .or_else(|| rest.strip_prefix(')'))
        .unwrap_or(line)
}

fn looks_like_label(line: &str) -> bool {
    let lowered = line.to_lowercase();
    lowered.starts_with("here are")
        || lowered.starts_with("here is")
        || lowered.starts_with("sure")
        || lowered == "names"
        || lowered == "ideas"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_json_object_with_surrounding_prose() {
        let raw = r#"prefix {"ideas":["A","B"]} suffix"#;
        let extraction = extract(raw, 10);
        assert_eq!(extraction.ideas, vec!["A", "B"]);
        assert!(extraction.explanations.is_empty());
    }

    #[test]
    fn parses_markdown_fenced_json() {
        let raw = "```json\n{\"ideas\": [\"Spice Route\", \"Pan Stories\"]}\n```";
        let extraction = extract(raw, 10);
        assert_eq!(extraction.ideas, vec!["Spice Route", "Pan Stories"]);
    }

    #[test]
    fn accepts_legacy_names_field() {
        let raw = r#"{"names": ["Tech Loom", "Wire Garden"]}"#;
        let extraction = extract(raw, 10);
        assert_eq!(extraction.ideas, vec!["Tech Loom", "Wire Garden"]);
    }

    #[test]
    fn parses_explanations_alongside_ideas() {
        let raw = r#"{"ideas": ["Ember Kitchen"], "explanations": ["Warmth of a home stove"]}"#;
        let extraction = extract(raw, 10);
        assert_eq!(extraction.ideas, vec!["Ember Kitchen"]);
        assert_eq!(extraction.explanations, vec!["Warmth of a home stove"]);
    }

    #[test]
    fn missing_arrays_become_empty_sequences() {
        let extraction = extract(r#"{"count": 3}"#, 10);
        assert!(extraction.ideas.is_empty());
        assert!(extraction.explanations.is_empty());
    }

    #[test]
    fn non_array_ideas_field_becomes_empty() {
        let extraction = extract(r#"{"ideas": "not a list"}"#, 10);
        assert!(extraction.ideas.is_empty());
    }

    #[test]
    fn splits_bulleted_lines() {
        let extraction = extract("- Alpha\n- Beta Gamma\n", 10);
        assert_eq!(extraction.ideas, vec!["Alpha", "Beta Gamma"]);
    }

    #[test]
    fn strips_numbering_quotes_and_labels() {
        let raw = "Here are some ideas:\n1. \"Crafted Corner\"\n2) Name: Maker Haven\n\n```";
        let extraction = extract(raw, 10);
        assert_eq!(extraction.ideas, vec!["Crafted Corner", "Maker Haven"]);
    }

    #[test]
    fn line_path_truncates_to_limit() {
        let raw = "First Pick\nSecond Pick\nThird Pick\nFourth Pick";
        let extraction = extract(raw, 2);
        assert_eq!(extraction.ideas, vec!["First Pick", "Second Pick"]);
    }

    #[test]
    fn json_path_is_not_truncated() {
        let raw = r#"{"ideas": ["One Two", "Three Four", "Five Six"]}"#;
        let extraction = extract(raw, 2);
        assert_eq!(extraction.ideas.len(), 3);
    }

    #[test]
    fn broken_json_falls_back_to_lines() {
        let raw = "{\"ideas\": [\"Alpha\",\nBeta Gamma\nDelta Epsilon";
        let extraction = extract(raw, 10);
        assert!(extraction.ideas.contains(&"Beta Gamma".to_string()));
        assert!(extraction.ideas.contains(&"Delta Epsilon".to_string()));
    }

    #[test]
    fn empty_input_yields_empty_extraction() {
        assert_eq!(extract("", 10), Extraction::default());
        assert_eq!(extract("  \n \t", 10), Extraction::default());
    }
}
