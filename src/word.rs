use smallvec::SmallVec;
use std::borrow::Cow;
use std::ops::{Deref, Range};
use std::slice;

pub struct Words<'a> {
    text: &'a str,
    indices: slice::Iter<'a, Range<usize>>,
}

impl<'a> Words<'a> {
    #[inline]
    pub fn new(text: &'a str, indices: &'a [Range<usize>]) -> Words<'a> {
        Words {
            text,
            indices: indices.iter(),
        }
    }

    pub fn join(mut self) -> Cow<'a, str> {
        match self.len() {
            0 => Cow::Borrowed(""),
            1 => Cow::Borrowed(self.next().unwrap_or_default()),
            _ => Cow::Owned(self.collect::<SmallVec<[&str; 4]>>().join(" ")),
        }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<&'a str> {
        self.indices
            .next()
            .map(|Range { start, end }| &self.text[*start..*end])
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl<'a> ExactSizeIterator for Words<'a> {}

#[derive(Clone, Debug, Default)]
pub struct WordIndices(SmallVec<[Range<usize>; 7]>);

impl WordIndices {
    #[inline]
    pub fn new() -> Self {
        WordIndices(SmallVec::new())
    }

    /// Byte ranges of the space-separated words of `text`.
    pub fn of(text: &str) -> Self {
        let mut indices = WordIndices::new();
        let mut start = 0;
        for word in text.split(' ') {
            if !word.is_empty() {
                indices.push(start..start + word.len());
            }
            start += word.len() + 1;
        }
        indices
    }

    #[inline]
    pub fn push(&mut self, indices: Range<usize>) {
        self.0.push(indices)
    }
}

impl Deref for WordIndices {
    type Target = [Range<usize>];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
