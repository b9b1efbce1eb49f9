//! Lexical shape policy for name candidates.

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum whitespace-separated tokens a name may have.
const MAX_TOKENS: usize = 3;

/// Letters and spaces only, starting with a letter, at most 30 chars.
static NAME_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z ]{0,29}$").expect("valid name shape pattern"));

/// Whether a candidate satisfies the name-shape policy after trimming.
///
/// Total and side-effect-free; applied identically to remote and fallback
/// output.
pub fn is_name_shaped(candidate: &str) -> bool {
    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        return false;
    }
    if trimmed.split_whitespace().count() > MAX_TOKENS {
        return false;
    }
    NAME_SHAPE.is_match(trimmed)
}

/// Filter candidates down to those matching the shape policy, trimming the
/// survivors. Order-preserving; unmatching items are dropped, not errored.
pub fn sanitize(candidates: Vec<String>) -> Vec<String> {
    candidates
        .into_iter()
        .filter_map(|candidate| {
            let trimmed = candidate.trim();
            if is_name_shaped(trimmed) {
                Some(trimmed.to_string())
            } else {
                log::debug!("dropping candidate that fails the shape policy: {candidate:?}");
                None
            }
        })
        .collect()
}
