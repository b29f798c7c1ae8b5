use super::term::Term;
use once_cell::sync::Lazy;

static LINEAGE_SUFFIXES: &[&str] = include!(concat!(env!("OUT_DIR"), "/lineage_suffixes.rs"));

static CREDENTIAL_SUFFIXES: &[&str] =
    include!(concat!(env!("OUT_DIR"), "/credential_suffixes.rs"));

static SUFFIXES: phf::Set<&'static str> = include!(concat!(env!("OUT_DIR"), "/suffixes.rs"));

static REWRITES: Lazy<Vec<Term>> = Lazy::new(|| {
    LINEAGE_SUFFIXES
        .iter()
        .chain(CREDENTIAL_SUFFIXES.iter())
        .map(|&suffix| Term::new(suffix, suffix))
        .collect()
});

/// Exact, case-sensitive match against the canonical spellings.
pub fn is_suffix(word: &str) -> bool {
    SUFFIXES.contains(word)
}

pub fn is_lineage_suffix(word: &str) -> bool {
    LINEAGE_SUFFIXES.contains(&word)
}

/// Rewrites every generational or credential suffix to its canonical
/// spelling, e.g. "jr" to "Jr." and "PH.D" to "Ph.D.".
pub fn rewrite_suffixes(text: &mut String) {
    for term in REWRITES.iter() {
        term.rewrite(text);
    }
}

/// Index of the first word of the trailing run of suffixes, or `words.len()`
/// if the last word isn't a suffix.
///
/// Only a contiguous run at the very end counts. The first word is never
/// taken, so a lone "Jr." or "Ma" stays a name.
pub fn find_suffix_index(words: &[&str]) -> usize {
    let mut index = words.len();
    while index > 1 && is_suffix(words[index - 1]) {
        index -= 1;
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewritten(text: &str) -> String {
        let mut text = text.to_string();
        rewrite_suffixes(&mut text);
        text
    }

    #[test]
    fn membership() {
        assert!(is_suffix("Jr."));
        assert!(is_suffix("III"));
        assert!(is_suffix("PhD"));
        assert!(is_suffix("Ph.D."));
        assert!(is_suffix("Esq"));
        assert!(!is_suffix("Jr"));
        assert!(!is_suffix("phd"));
        assert!(!is_suffix("Smith"));
    }

    #[test]
    fn lineage() {
        assert!(is_lineage_suffix("V"));
        assert!(is_lineage_suffix("2nd"));
        assert!(!is_lineage_suffix("MD"));
    }

    #[test]
    fn canonical_spelling() {
        assert_eq!("King Jr.", rewritten("King jr"));
        assert_eq!("Smith Ph.D.", rewritten("Smith PH.D"));
        assert_eq!("Bowles MPhil", rewritten("Bowles MPhil."));
        assert_eq!("Doe PhD", rewritten("Doe phd"));
        assert_eq!("McCain III", rewritten("McCain iii"));
        assert_eq!("Lawrence Senior", rewritten("Lawrence senior"));
    }

    #[test]
    fn leaves_names_alone() {
        assert_eq!("Esquivel Iris", rewritten("Esquivel Iris"));
    }

    #[test]
    fn trailing_run() {
        assert_eq!(0, find_suffix_index(&[]));
        assert_eq!(1, find_suffix_index(&["Finn"]));
        assert_eq!(1, find_suffix_index(&["Jr."]));
        assert_eq!(2, find_suffix_index(&["Ryland", "Jones"]));
        assert_eq!(1, find_suffix_index(&["Finn", "Jr."]));
        assert_eq!(2, find_suffix_index(&["Jane", "Doe", "MD", "PhD"]));
    }

    #[test]
    fn only_at_the_end() {
        assert_eq!(3, find_suffix_index(&["Jane", "MD", "Doe"]));
    }
}
