use super::case;
use super::normalize::normalize;
use super::sanitize::sanitize;
use super::suffix;
use super::surname;
use super::title;
use super::word::{WordIndices, Words};
use super::Name;
use compact_str::CompactString;
use once_cell::unsync::OnceCell;
use smallvec::SmallVec;
use std::cmp;
use std::fmt;
use std::ops::Range;

/// Where each component sits among the words of the normalized name.
///
/// Built in dependency order: the trailing suffixes first, then salutations
/// among what precedes them, then given name and surname among the rest.
#[derive(Debug)]
struct Layout {
    words: WordIndices,
    suffix_index: usize,
    salutation: WordIndices,
    rest: WordIndices,
    surname_index: usize,
}

impl Layout {
    fn of(text: &str) -> Layout {
        let words = WordIndices::of(text);
        let mut salutation = WordIndices::new();
        let mut rest = WordIndices::new();

        let suffix_index = {
            let all: SmallVec<[&str; 7]> = Words::new(text, &words).collect();
            let suffix_index = suffix::find_suffix_index(&all);

            // Salutations are taken wherever they appear, not only up front,
            // so "Hon. Rev." and similar runs come out whole
            let mut i = 0;
            while i < suffix_index {
                let len = title::salutation_len(&all[i..suffix_index]);
                if len > 0 {
                    for range in &words[i..i + len] {
                        salutation.push(range.clone());
                    }
                    i += len;
                } else {
                    rest.push(words[i].clone());
                    i += 1;
                }
            }
            suffix_index
        };

        // A single word after a salutation is a surname ("Mr. Smith")
        let surname_index = if rest.len() == 1 && !salutation.is_empty() {
            0
        } else {
            let rest_words: SmallVec<[&str; 7]> = Words::new(text, &rest).collect();
            surname::find_surname_index(&rest_words)
        };

        Layout {
            words,
            suffix_index,
            salutation,
            rest,
            surname_index,
        }
    }

    fn suffix(&self) -> &[Range<usize>] {
        &self.words[self.suffix_index..]
    }

    fn given_name(&self) -> &[Range<usize>] {
        &self.rest[..cmp::min(1, self.surname_index)]
    }

    fn middle_names(&self) -> &[Range<usize>] {
        &self.rest[cmp::min(1, self.surname_index)..self.surname_index]
    }

    fn surname(&self) -> &[Range<usize>] {
        &self.rest[self.surname_index..]
    }
}

/// Splits a name lazily, one component at a time.
///
/// Nothing is computed until a component is asked for, and each result is
/// memoized, so asking for the same component twice costs nothing. Every
/// accessor agrees with the corresponding field of [`Name::parse`] on the
/// same input; `Name::parse` is built from these accessors.
///
/// ```
/// use name_parts::NameParser;
///
/// let parser = NameParser::new("Kevin C Masters");
/// assert_eq!("Masters", parser.last());
/// assert_eq!("C.", parser.middle());
/// ```
pub struct NameParser<'a> {
    input: &'a str,
    normalized: OnceCell<String>,
    layout: OnceCell<Layout>,
    salutation: OnceCell<CompactString>,
    first: OnceCell<CompactString>,
    middle: OnceCell<CompactString>,
    last: OnceCell<CompactString>,
    suffix: OnceCell<CompactString>,
}

impl<'a> NameParser<'a> {
    pub fn new(input: &'a str) -> NameParser<'a> {
        NameParser {
            input,
            normalized: OnceCell::new(),
            layout: OnceCell::new(),
            salutation: OnceCell::new(),
            first: OnceCell::new(),
            middle: OnceCell::new(),
            last: OnceCell::new(),
            suffix: OnceCell::new(),
        }
    }

    /// The string as it was passed in.
    pub fn input(&self) -> &'a str {
        self.input
    }

    /// The sanitized, canonicalized form of the input that the components
    /// are extracted from.
    pub fn normalized(&self) -> &str {
        self.normalized.get_or_init(|| normalize(&sanitize(self.input)))
    }

    fn layout(&self) -> &Layout {
        self.layout.get_or_init(|| Layout::of(self.normalized()))
    }

    fn join(&self, indices: &[Range<usize>]) -> CompactString {
        CompactString::from(&*Words::new(self.normalized(), indices).join())
    }

    pub fn salutation(&self) -> &str {
        self.salutation.get_or_init(|| self.join(&self.layout().salutation))
    }

    pub fn first(&self) -> &str {
        self.first.get_or_init(|| self.join(self.layout().given_name()))
    }

    pub fn middle(&self) -> &str {
        self.middle.get_or_init(|| {
            let middle = self.join(self.layout().middle_names());

            // A lone letter left over is an initial, however it was written
            let mut letters = middle.chars().filter(|&c| c != '.');
            match (letters.next(), letters.next()) {
                (Some(c), None) => CompactString::from(case::initial(c)),
                _ => middle,
            }
        })
    }

    /// Empty for a lone word with no salutation, e.g. "Finn" or "Finn Jr.".
    pub fn last(&self) -> &str {
        self.last.get_or_init(|| self.join(self.layout().surname()))
    }

    /// One or more trailing suffixes, space-separated, e.g. "MD PhD".
    pub fn suffix(&self) -> &str {
        self.suffix.get_or_init(|| self.join(self.layout().suffix()))
    }

    pub fn to_name(&self) -> Name {
        Name::from_parts(
            self.salutation(),
            self.first(),
            self.middle(),
            self.last(),
            self.suffix(),
        )
    }

    pub fn into_name(self) -> Name {
        self.to_name()
    }
}

impl<'a> fmt::Debug for NameParser<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("NameParser")
            .field("input", &self.input)
            .field("normalized", &self.normalized.get())
            .finish()
    }
}
