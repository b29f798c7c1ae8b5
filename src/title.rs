use super::term::Term;
use once_cell::sync::Lazy;
use smallvec::SmallVec;
use std::cmp::{self, Reverse};

// Canonical salutation -> lowercase variants that rewrite to it
static SALUTATIONS: phf::Map<&'static str, &'static [&'static str]> =
    include!(concat!(env!("OUT_DIR"), "/salutations.rs"));

struct SalutationRewrite {
    variants: SmallVec<[Term; 2]>,
}

// Longest canonical form first, so "lieutenant colonel" becomes "Lt. Col."
// before "lieutenant" or "colonel" get a chance to claim half of it. Ties go
// to the longer variant phrase, then alphabetically, so the order never
// depends on hash layout.
static REWRITES: Lazy<Vec<SalutationRewrite>> = Lazy::new(|| {
    let mut entries: Vec<(&'static str, SmallVec<[&'static str; 2]>)> = SALUTATIONS
        .entries()
        .map(|(&canonical, &variants)| {
            let mut variants: SmallVec<[&'static str; 2]> = variants.iter().cloned().collect();
            variants.sort_by_key(|v| Reverse(v.len()));
            (canonical, variants)
        })
        .collect();

    entries.sort_by(|(a, a_variants), (b, b_variants)| {
        b.len()
            .cmp(&a.len())
            .then_with(|| longest(b_variants).cmp(&longest(a_variants)))
            .then_with(|| a.cmp(b))
    });

    entries
        .into_iter()
        .map(|(canonical, variants)| SalutationRewrite {
            variants: variants.iter().map(|v| Term::new(v, canonical)).collect(),
        })
        .collect()
});

fn longest(variants: &[&str]) -> usize {
    variants.first().map_or(0, |v| v.len())
}

static MAX_SALUTATION_WORDS: Lazy<usize> = Lazy::new(|| {
    SALUTATIONS
        .keys()
        .map(|k| k.split(' ').count())
        .max()
        .unwrap_or(1)
});

/// Rewrites every recognized salutation variant to its canonical form,
/// e.g. "doctor" to "Dr." and "lieutenant colonel" to "Lt. Col.".
///
/// Which variants are present is decided up front against the unmodified
/// text; the replacements then run longest canonical form first.
pub fn rewrite_salutations(text: &mut String) {
    let before: &str = text;
    let matched: SmallVec<[&Term; 4]> = REWRITES
        .iter()
        .flat_map(|rewrite| rewrite.variants.iter())
        .filter(|term| term.is_match(before))
        .collect();

    for term in matched {
        term.rewrite(text);
    }
}

/// Is this exact, canonically spelled sequence of words a salutation?
pub fn is_salutation(words: &[&str]) -> bool {
    match words.len() {
        0 => false,
        1 => SALUTATIONS.contains_key(words[0]),
        _ => SALUTATIONS.contains_key(&*words.join(" ")),
    }
}

/// Length in words of the longest salutation starting at `words[0]`, or 0.
pub fn salutation_len(words: &[&str]) -> usize {
    let max_len = cmp::min(*MAX_SALUTATION_WORDS, words.len());
    (1..=max_len)
        .rev()
        .find(|&len| is_salutation(&words[..len]))
        .unwrap_or(0)
}
