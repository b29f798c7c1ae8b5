//! A library for splitting free-text human names into their parts:
//! salutation, first name, middle name, last name, and suffix.
//!
//! The input is cleaned up (control characters, commas and a stray "the"
//! removed), rewritten into canonical form using built-in dictionaries of
//! salutations, generational suffixes, credentials and surname particles,
//! and then split by position.
//!
//! ```
//! use name_parts::Name;
//!
//! let name = Name::parse("Doctor martin luther king jr");
//! assert_eq!("Dr.", name.salutation());
//! assert_eq!("Martin", name.first());
//! assert_eq!("Luther", name.middle());
//! assert_eq!("King", name.last());
//! assert_eq!("Jr.", name.suffix());
//! assert_eq!("Dr. Martin Luther King Jr.", name.full());
//! ```
//!
//! Parsing never fails. A component that isn't found is an empty string.
//! This is a heuristic: it has no notion of which names are real, and it
//! will misread some inputs.

mod case;
mod normalize;
mod parse;
mod sanitize;
mod suffix;
mod surname;
mod term;
mod title;
mod word;

#[cfg(feature = "serialization")]
mod serialization;

pub use normalize::normalize;
pub use parse::NameParser;
pub use sanitize::sanitize;

use compact_str::CompactString;
use std::fmt;

/// The parts of a parsed name.
///
/// `full` is always the non-empty parts joined with single spaces, in the
/// order salutation, first, middle, last, suffix.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Name {
    full: CompactString,
    salutation: CompactString,
    first: CompactString,
    middle: CompactString,
    last: CompactString,
    suffix: CompactString,
}

impl Name {
    /// Parses a name. Any string is accepted, including the empty string.
    pub fn parse(name: &str) -> Name {
        NameParser::new(name).into_name()
    }

    pub(crate) fn from_parts(
        salutation: &str,
        first: &str,
        middle: &str,
        last: &str,
        suffix: &str,
    ) -> Name {
        let mut full = CompactString::default();
        for part in [salutation, first, middle, last, suffix].iter() {
            if part.is_empty() {
                continue;
            }
            if !full.is_empty() {
                full.push(' ');
            }
            full.push_str(part);
        }

        Name {
            full,
            salutation: salutation.into(),
            first: first.into(),
            middle: middle.into(),
            last: last.into(),
            suffix: suffix.into(),
        }
    }

    /// The name reassembled from its canonical parts.
    #[inline]
    pub fn full(&self) -> &str {
        &self.full
    }

    /// Title(s) before the name, e.g. "Dr." or "Hon. Rev.".
    #[inline]
    pub fn salutation(&self) -> &str {
        &self.salutation
    }

    #[inline]
    pub fn first(&self) -> &str {
        &self.first
    }

    #[inline]
    pub fn middle(&self) -> &str {
        &self.middle
    }

    /// Includes a compound particle, if any, e.g. "Von Fange".
    #[inline]
    pub fn last(&self) -> &str {
        &self.last
    }

    /// Generational and credential suffixes, e.g. "Jr." or "MD PhD".
    #[inline]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// True if nothing at all was found in the input.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.full.is_empty()
    }
}

impl<'a> From<&'a str> for Name {
    fn from(name: &'a str) -> Name {
        Name::parse(name)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.full)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        let name = Name::parse("");
        assert!(name.is_empty());
        assert_eq!(Name::default(), name);
    }

    #[test]
    fn whitespace_only() {
        assert!(Name::parse(" \t ,, the ").is_empty());
    }

    #[test]
    fn single_word() {
        let name = Name::parse("Finn");
        assert_eq!("Finn", name.first());
        assert_eq!("", name.salutation());
        assert_eq!("", name.middle());
        assert_eq!("", name.last());
        assert_eq!("", name.suffix());
        assert_eq!("Finn", name.full());
    }

    #[test]
    fn full_skips_missing_parts() {
        let name = Name::from_parts("Dr.", "", "", "Doe", "MD");
        assert_eq!("Dr. Doe MD", name.full());
    }

    #[test]
    fn display() {
        let name = Name::from("Kevin C Masters");
        assert_eq!("Kevin C. Masters", name.to_string());
    }
}
