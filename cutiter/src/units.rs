use std::iter::FusedIterator;
use std::str::Chars;

/// Yields each `char` of a string as a one-char `&str`.
///
/// This is what `Iter` does with an empty separator.  It only tracks a position in the input,
/// so dropping it before the end releases nothing and leaks nothing.
#[derive(Clone, Debug)]
pub struct Units<'a> {
    chars: Chars<'a>,
}

impl<'a> Units<'a> {
    pub fn new(s: &'a str) -> Units<'a> { Units { chars: s.chars() } }

    /// The part of the input not yet yielded.
    pub fn as_str(&self) -> &'a str { self.chars.as_str() }
}

impl<'a> Iterator for Units<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let s = self.chars.as_str();
        let c = self.chars.next()?;
        Some(&s[..c.len_utf8()])
    }

    fn size_hint(&self) -> (usize, Option<usize>) { self.chars.size_hint() }
}

impl FusedIterator for Units<'_> {}
