use crate::units::Units;

/// A cursor that splits a string on a separator without allocating.
/// Every segment it yields borrows from the input.
///
/// ```
/// let mut it = cutiter::Iter::default();
/// let mut collected = Vec::new();
/// let mut next = it.start("a.0.b.c.d", ".");
/// while let Some(k) = next {
///     if k == "a" {
///         // Skip the element after "a".
///         it.advance();
///     } else {
///         collected.push(k);
///     }
///     next = it.advance();
/// }
/// assert_eq!(vec!["b", "c", "d"], collected);
/// ```
///
/// The first empty segment ends the iteration.  So a leading separator, a trailing separator,
/// or two adjacent separators stop it early instead of yielding `""` like `str::split` does.
/// Once a call returns `None`, every later call returns `None` too.
///
/// An empty separator yields each `char` of the input as its own segment.
#[derive(Clone, Debug, Default)]
pub struct Iter<'a> {
    sep: &'a str,
    rest: &'a str,
}

impl<'a> Iter<'a> {
    /// Makes a cursor positioned before the first segment of `input`.
    /// The first `advance()` returns what `start(input, sep)` would.
    pub fn new(input: &'a str, sep: &'a str) -> Iter<'a> { Iter { sep, rest: input } }

    /// Begins iterating over `input` and returns the first segment.
    ///
    /// Returns `Some(input)` when `input` does not contain `sep`; the following `advance()`
    /// then returns `None`.  Returns `None` when `input` is empty.
    pub fn start(&mut self, input: &'a str, sep: &'a str) -> Option<&'a str> {
        self.sep = sep;
        self.cut(input)
    }

    /// Returns the next segment, or `None` when iteration is complete.
    pub fn advance(&mut self) -> Option<&'a str> { self.cut(self.rest) }

    /// The part of the input not yet consumed.
    pub fn remainder(&self) -> &'a str { self.rest }

    pub fn separator(&self) -> &'a str { self.sep }

    fn cut(&mut self, s: &'a str) -> Option<&'a str> {
        let (key, rest) = if self.sep.is_empty() {
            let mut units = Units::new(s);
            let key = units.next().unwrap_or("");
            (key, units.as_str())
        } else {
            s.split_once(self.sep).unwrap_or((s, ""))
        };
        if key.is_empty() {
            // Terminal state.  Clearing `rest` keeps later calls returning `None`.
            self.rest = "";
            return None;
        }
        self.rest = rest;
        Some(key)
    }
}
