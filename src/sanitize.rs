use once_cell::sync::Lazy;
use regex::Regex;
use smallvec::SmallVec;

// Control characters, commas, and a standalone "the" (as in "the
// honorable ...") all become plain whitespace
static NOISE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{Cc},]|(?i:\bthe\b)").expect("valid pattern"));

/// Strips control characters, commas and the article "the" from a raw name,
/// and collapses whitespace to single spaces. Never fails; the result may be
/// empty.
pub fn sanitize(raw: &str) -> String {
    let cleaned = NOISE.replace_all(raw, " ");
    let words: SmallVec<[&str; 8]> = cleaned.split_whitespace().collect();
    words.join(" ")
}
