//! Procedural name generation for when the remote generator is unusable.
//!
//! Names are assembled from description keywords, a niche vocabulary table,
//! and fixed prefix/suffix word lists, filled into a fixed set of template
//! shapes. The generator always returns exactly the requested number of
//! unique names: the randomized phase is capped per slot, and a
//! deterministic top-up from fixed vocabulary covers any shortfall. All
//! vocabulary is letters-and-spaces only, so every emitted name satisfies
//! the sanitizer's shape policy by construction.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::prompt::{MAX_NAME_CHARS, MIN_NAME_CHARS};

/// Description tokens this short carry no naming signal.
const MIN_KEYWORD_CHARS: usize = 4;

/// Random fill attempts per output slot before giving up on that slot.
const MAX_ATTEMPTS_PER_SLOT: usize = 15;

const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "with", "from", "this", "that", "about", "your", "channel", "videos",
    "content",
];

const PREFIXES: &[&str] = &[
    "Pro", "Elite", "Master", "Prime", "Ultra", "Super", "Max", "Top", "Best", "Great",
];

const SUFFIXES: &[&str] = &[
    "Hub", "Zone", "Lab", "Studio", "Academy", "Works", "Pro", "Elite", "TV", "Tube", "Channel",
    "Media", "Content",
];

/// Topical substring → curated vocabulary. First matching niche wins per
/// description token.
const NICHE_VOCABULARY: &[(&str, &[&str])] = &[
    ("cook", &["Kitchen", "Chef", "Taste", "Food", "Recipe"]),
    ("tech", &["Tech", "Code", "Dev", "Digital", "Cyber"]),
    ("fitness", &["Fit", "Strong", "Health", "Gym", "Workout"]),
    ("education", &["Learn", "Study", "Academy", "School", "Edu"]),
    ("gaming", &["Game", "Play", "Gamer", "Arcade", "Quest"]),
    ("music", &["Music", "Sound", "Audio", "Beat", "Rhythm"]),
    ("art", &["Art", "Creative", "Design", "Studio", "Canvas"]),
    ("travel", &["Travel", "Journey", "Adventure", "Explore", "Wander"]),
];

/// Deterministic top-up names for degenerate keyword pools.
const GENERIC_NAMES: &[&str] = &[
    "Channel Pro",
    "Content Hub",
    "Video Zone",
    "Media Lab",
    "Creative Studio",
    "Digital Academy",
    "Video Works",
    "Content Pro",
    "Media Hub",
    "Video Lab",
    "Channel Elite",
    "Content Zone",
    "Video Hub",
    "Media Pro",
    "Creative Lab",
];

#[derive(Debug, Clone, Copy)]
enum Piece {
    Keyword,
    SecondKeyword,
    Prefix,
    Suffix,
    SecondSuffix,
    Literal(&'static str),
}

const TEMPLATES: &[&[Piece]] = &[
    &[Piece::Keyword, Piece::Literal(" "), Piece::Suffix],
    &[Piece::Prefix, Piece::Literal(" "), Piece::Keyword],
    &[Piece::Keyword, Piece::Literal(" "), Piece::SecondKeyword],
    &[
        Piece::Prefix,
        Piece::Literal(" "),
        Piece::Keyword,
        Piece::Literal(" "),
        Piece::Suffix,
    ],
    &[
        Piece::Keyword,
        Piece::Literal(" "),
        Piece::Suffix,
        Piece::Literal(" "),
        Piece::SecondSuffix,
    ],
    &[Piece::Keyword, Piece::Literal("TV")],
    &[Piece::Keyword, Piece::Literal("Tube")],
    &[Piece::Keyword, Piece::Literal("Channel")],
];

/// Generate exactly `count` unique, syntactically valid names.
///
/// Never returns fewer than requested, whatever the description looks like.
pub fn generate_fallback(description: &str, count: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    let keywords = keyword_pool(description);
    let mut names: Vec<String> = Vec::with_capacity(count);
    let mut used: HashSet<String> = HashSet::new();

    for _ in 0..count {
        for _ in 0..MAX_ATTEMPTS_PER_SLOT {
            let template = TEMPLATES[rng.gen_range(0..TEMPLATES.len())];
            let candidate = fill_template(template, &keywords, &mut rng);
            if candidate.len() >= MIN_NAME_CHARS
                && candidate.len() <= MAX_NAME_CHARS
                && used.insert(candidate.clone())
            {
                names.push(candidate);
                break;
            }
        }
    }

    if names.len() < count {
        log::debug!(
            "random phase produced {} of {} names, topping up deterministically",
            names.len(),
            count
        );
        top_up(&mut names, &mut used, count);
    }

    names
}

/// Keyword pool: description tokens worth keeping, plus curated niche
/// vocabulary for every token that names a recognized niche.
fn keyword_pool(description: &str) -> Vec<String> {
    let tokens: Vec<String> = description
        .to_lowercase()
        .split_whitespace()
        .map(|token| token.chars().filter(|c| c.is_ascii_alphabetic()).collect::<String>())
        .filter(|token| token.len() >= MIN_KEYWORD_CHARS && !STOP_WORDS.contains(&token.as_str()))
        .collect();

    let mut keywords = tokens.clone();
    for token in &tokens {
        for (niche, vocabulary) in NICHE_VOCABULARY {
            if token.contains(niche) {
                keywords.extend(vocabulary.iter().map(|word| (*word).to_string()));
                break;
            }
        }
    }
    keywords
}

fn fill_template(template: &[Piece], keywords: &[String], rng: &mut impl Rng) -> String {
    let mut name = String::new();
    for piece in template {
        match piece {
            Piece::Keyword => {
                let keyword = keywords
                    .choose(rng)
                    .map(String::as_str)
                    .unwrap_or("channel");
                name.push_str(&title_case(keyword));
            }
            Piece::SecondKeyword => {
                let keyword = if keywords.len() > 1 {
                    keywords.choose(rng).map(String::as_str).unwrap_or("hub")
                } else {
                    "hub"
                };
                name.push_str(&title_case(keyword));
            }
            Piece::Prefix => name.push_str(PREFIXES[rng.gen_range(0..PREFIXES.len())]),
            Piece::Suffix => name.push_str(SUFFIXES[rng.gen_range(0..SUFFIXES.len())]),
            Piece::SecondSuffix => name.push_str(SUFFIXES[rng.gen_range(0..SUFFIXES.len())]),
            Piece::Literal(text) => name.push_str(text),
        }
    }
    collapse_spaces(&name)
}

/// Fill the remaining slots from fixed vocabulary: the generic name list
/// first, then the prefix × suffix cross product. The cross product alone
/// holds far more valid combinations than any allowed count, so the
/// full-count contract always holds.
fn top_up(names: &mut Vec<String>, used: &mut HashSet<String>, count: usize) {
    for name in GENERIC_NAMES {
        if names.len() == count {
            return;
        }
        if used.insert((*name).to_string()) {
            names.push((*name).to_string());
        }
    }

    for prefix in PREFIXES {
        for suffix in SUFFIXES {
            if names.len() == count {
                return;
            }
            let name = format!("{prefix} {suffix}");
            if name.len() < MIN_NAME_CHARS || name.len() > MAX_NAME_CHARS {
                continue;
            }
            if used.insert(name.clone()) {
                names.push(name);
            }
        }
    }
}

/// First letter upper, rest lower, matching how keywords are stored.
fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

fn collapse_spaces(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}
