use regex::Regex;
use std::sync::LazyLock;

/// Rating assumed when an answer carries no parenthesized number.
pub const FALLBACK_RATING: u8 = 1;

static RATING_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((\d+)\)").expect("static regex"));

/// Pull the rating out of an option label such as `"Basic manual checks (2)"`.
///
/// Only the first parenthesized integer is read, and later ones are never
/// consulted. Ratings are `u8`: a first number that does not fit is not a
/// rating, so it falls back to [`FALLBACK_RATING`] like an answer without one.
/// Stored answers are always option texts, which carry 1 through 5.
pub fn extract_rating(answer: &str) -> u8 {
    RATING_PATTERN
        .captures(answer)
        .and_then(|captures| captures.get(1))
        .and_then(|digits| digits.as_str().parse::<u8>().ok())
        .unwrap_or(FALLBACK_RATING)
}
