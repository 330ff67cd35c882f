//! Share slug generation.
//!
//! Slugs are short, readable keys of the form `{adjective}-{noun}-{NNNN}`,
//! drawn from two fixed ten-word lists plus a zero-padded number. That gives
//! a million combinations; collisions are possible and handled by the store
//! with a retry, not here.

use rand::Rng;

const ADJECTIVES: &[&str] = &[
    "sweet", "lovely", "dear", "precious", "tender", "gentle", "warm", "bright", "rosy", "golden",
];
const NOUNS: &[&str] = &[
    "heart", "rose", "bloom", "petal", "garden", "dream", "wish", "kiss", "hug", "love",
];

/// Generate a fresh random slug, e.g. `sweet-rose-0042`.
#[must_use]
pub fn generate_slug() -> String {
    let mut rng = rand::rng();
    let adj = ADJECTIVES[rng.random_range(0..ADJECTIVES.len())];
    let noun = NOUNS[rng.random_range(0..NOUNS.len())];
    let num = rng.random_range(0..9999u16);
    format!("{adj}-{noun}-{num:04}")
}

/// Cheap shape check used before hitting the database: lowercase word,
/// dash, lowercase word, dash, exactly four digits.
#[must_use]
pub fn looks_like_slug(candidate: &str) -> bool {
    let mut parts = candidate.split('-');
    let (Some(adj), Some(noun), Some(num), None) = (parts.next(), parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    let word_ok = |w: &str| !w.is_empty() && w.chars().all(|c| c.is_ascii_lowercase());
    word_ok(adj) && word_ok(noun) && num.len() == 4 && num.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
#[path = "slug_test.rs"]
mod tests;
