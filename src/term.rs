use regex::{NoExpand, Regex};
use std::borrow::Cow;

/// A dictionary term paired with the canonical spelling it is rewritten to.
///
/// Matching is case-insensitive and whole-word. Surrounding periods on the
/// term are ignored, and one trailing period in the text is consumed along
/// with the match, so "PhD", "phd" and "PhD." all rewrite to the same form.
#[derive(Debug)]
pub struct Term {
    pub canonical: &'static str,
    pattern: Regex,
}

impl Term {
    pub fn new(variant: &str, canonical: &'static str) -> Term {
        let core = variant.trim_matches('.');
        debug_assert!(!core.is_empty());

        let pattern = format!(
            r"(?i){}{}{}\.?",
            boundary(core.chars().next()),
            regex::escape(core),
            boundary(core.chars().last()),
        );

        Term {
            canonical,
            pattern: Regex::new(&pattern).expect("escaped dictionary term is a valid pattern"),
        }
    }

    #[inline]
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    pub fn rewrite(&self, text: &mut String) {
        let replaced = match self.pattern.replace_all(text.as_str(), NoExpand(self.canonical)) {
            Cow::Owned(replaced) => Some(replaced),
            Cow::Borrowed(_) => None,
        };

        if let Some(replaced) = replaced {
            *text = replaced;
        }
    }
}

// A term edge that is itself punctuation (e.g. the parenthesis in
// "BSc(hons)") can never sit on a word boundary when followed by a space,
// so there we require the opposite: no word character glued on
fn boundary(edge: Option<char>) -> &'static str {
    match edge {
        Some(c) if c.is_alphanumeric() || c == '_' => r"\b",
        _ => r"\B",
    }
}
