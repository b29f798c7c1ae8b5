use super::case::capitalize_words;
use super::suffix;
use super::title;
use once_cell::sync::Lazy;
use regex::Regex;
use smallvec::SmallVec;

static PERIODS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.{2,}").expect("valid pattern"));

/// Rewrites a sanitized name into canonical form: salutation and suffix
/// variants become their dictionary spellings, bare single letters become
/// initials, and every word is capitalized.
///
/// The result has single spaces between words and no leading or trailing
/// whitespace.
pub fn normalize(sanitized: &str) -> String {
    let mut text = sanitized.to_string();
    title::rewrite_salutations(&mut text);
    suffix::rewrite_suffixes(&mut text);

    let text = mark_initials(&text);
    let text = PERIODS.replace_all(&text, ".");
    capitalize_words(&text)
}

// "Kevin C Masters" -> "Kevin C. Masters". A trailing "V" or "I" is a
// generational suffix, not an initial.
fn mark_initials(text: &str) -> String {
    let words: SmallVec<[&str; 8]> = text.split_whitespace().collect();
    let last = words.len().saturating_sub(1);

    let mut result = String::with_capacity(text.len() + 4);
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push_str(word);
        if is_bare_letter(word) && !(i == last && suffix::is_lineage_suffix(word)) {
            result.push('.');
        }
    }
    result
}

fn is_bare_letter(word: &str) -> bool {
    let mut chars = word.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.is_alphabetic(),
        _ => false,
    }
}
